use pokedex_pager::{
    DEFAULT_MAX_VISIBLE_PAGES, Entry, PageToken, PagedFilterView, filter_entries, paginate,
    summarize_pages, total_pages,
};

fn pokemon(names: &[&str]) -> Vec<Entry> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Entry::new(
                *name,
                format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1),
            )
        })
        .collect()
}

fn numbered(count: usize) -> Vec<Entry> {
    (1..=count)
        .map(|i| Entry::new(format!("pokemon-{}", i), format!("https://pokeapi.co/api/v2/pokemon/{}/", i)))
        .collect()
}

#[test]
fn test_pages_reconstruct_filtered_sequence() {
    for count in [0, 1, 19, 20, 21, 40, 57, 1000] {
        for page_size in [1, 3, 20, 64] {
            let entries = numbered(count);
            let filtered = filter_entries(&entries, "");
            let pages = total_pages(filtered.len(), page_size);

            let mut rebuilt = Vec::new();
            let mut expected_start = 0;
            for current in 1..=pages {
                let page = paginate(&filtered, page_size, current);
                assert_eq!(page.start_index, expected_start);
                assert!(!page.items.is_empty());
                expected_start = page.end_index;
                rebuilt.extend_from_slice(page.items);
            }

            assert_eq!(rebuilt, filtered, "count={} page_size={}", count, page_size);
        }
    }
}

#[test]
fn test_filtered_pages_reconstruct_matches() {
    let entries = numbered(250);
    let filtered = filter_entries(&entries, "pokemon-1");
    // pokemon-1, 10..19, 100..199
    assert_eq!(filtered.len(), 111);

    let pages = total_pages(filtered.len(), 20);
    assert_eq!(pages, 6);

    let rebuilt: Vec<&Entry> = (1..=pages)
        .flat_map(|current| paginate(&filtered, 20, current).items.to_vec())
        .collect();
    assert_eq!(rebuilt, filtered);
}

#[test]
fn test_filter_keeps_exactly_the_matches() {
    let entries = pokemon(&[
        "Pikachu",
        "raichu",
        "pichu",
        "charmander",
        "CHARMELEON",
        "charizard",
    ]);

    let filtered = filter_entries(&entries, "CHAR");
    let expected: Vec<&Entry> = entries
        .iter()
        .filter(|e| e.name.to_lowercase().contains("char"))
        .collect();
    assert_eq!(filtered, expected);
    assert_eq!(filtered.len(), 3);

    let all = filter_entries(&entries, "");
    assert_eq!(all.len(), entries.len());
}

#[test]
fn test_view_walks_all_pages_of_a_search() {
    let mut view = PagedFilterView::new(numbered(1000), 20);
    view.set_search_term("pokemon-9");
    // pokemon-9, 90..99, 900..999
    assert_eq!(view.total_items(), 111);
    assert_eq!(view.total_pages(), 6);

    let mut seen = Vec::new();
    loop {
        let page = view.page();
        seen.extend(page.items.iter().map(|e| e.name.clone()));
        if !view.next_page() {
            break;
        }
    }

    let expected: Vec<String> = view.filtered().iter().map(|e| e.name.clone()).collect();
    assert_eq!(seen, expected);
    assert_eq!(view.current_page(), 6);
}

#[test]
fn test_summaries_from_the_catalog_view() {
    use PageToken::{Ellipsis, Page};

    let mut view = PagedFilterView::new(numbered(200), 20);
    assert_eq!(view.total_pages(), 10);

    assert_eq!(
        view.page_tokens(),
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
    );

    view.last_page();
    assert_eq!(
        view.page_tokens(),
        vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
    );

    view.set_current_page(5);
    assert_eq!(
        view.page_tokens(),
        summarize_pages(10, 5, DEFAULT_MAX_VISIBLE_PAGES)
    );
}

#[test]
fn test_search_then_invalid_requests_leave_state_alone() {
    let mut view = PagedFilterView::new(numbered(100), 20);
    view.set_current_page(3);
    view.set_search_term("pokemon");
    assert_eq!(view.current_page(), 1);

    let total = view.total_pages();
    assert!(!view.set_current_page(0));
    assert!(!view.set_current_page(total + 1));
    assert_eq!(view.current_page(), 1);
}

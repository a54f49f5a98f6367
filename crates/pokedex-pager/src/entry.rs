/// Anything that can be matched by name in the filter stage
pub trait Named {
    fn name(&self) -> &str;
}

/// One catalog item: a unique name and the locator used to fetch its detail
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    pub name: String,
    pub locator: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locator: locator.into(),
        }
    }
}

impl Named for Entry {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<T: Named + ?Sized> Named for &T {
    fn name(&self) -> &str {
        (**self).name()
    }
}

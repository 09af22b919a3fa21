/// Single-slot container. Starts unset; the last `set` wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueHolder<T> {
    value: Option<T>,
}

impl<T> ValueHolder<T> {
    pub fn new() -> Self {
        Self { value: None }
    }

    pub fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// `None` until the first `set`.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    pub fn clear(&mut self) {
        self.value = None;
    }
}

impl<T> Default for ValueHolder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for ValueHolder<T> {
    fn from(value: T) -> Self {
        Self { value: Some(value) }
    }
}

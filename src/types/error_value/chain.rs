use super::ErrorValue;

/// Iterator over an error and its nested causes, outermost first.
///
/// Created by [`ErrorValue::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a ErrorValue>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub(crate) fn new(head: &'a ErrorValue) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ErrorValue;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}

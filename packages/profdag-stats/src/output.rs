/// Operator output slot: a sequence of opaque byte strings.
///
/// Stats extraction always leaves exactly one element in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSlot {
    data: Vec<Vec<u8>>,
}

impl OutputSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.data.get(index).map(Vec::as_slice)
    }

    pub fn resize(&mut self, len: usize) {
        self.data.resize(len, Vec::new());
    }

    /// Resize to one element and replace its contents
    pub fn write_single(&mut self, bytes: Vec<u8>) {
        self.data.clear();
        self.data.push(bytes);
    }

    pub fn into_inner(self) -> Vec<Vec<u8>> {
        self.data
    }
}

//! Append-only binary buffer writer with auto-growing capacity.

/// Initial allocation used by [`Writer::new`].
pub const DEFAULT_ALLOC_SIZE: usize = 1024;

/// A binary buffer writer that grows automatically as needed.
///
/// Bytes are only ever appended; nothing is rewound or overwritten.
/// [`Writer::to_vec`] copies out a snapshot without resetting the buffer.
///
/// # Example
///
/// ```
/// use lib0_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.buf(&[0x02, 0x03]);
/// assert_eq!(writer.to_vec(), [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Clone)]
pub struct Writer {
    /// The written bytes.
    uint8: Vec<u8>,
    /// Minimum reservation when the buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with the default allocation size.
    pub fn new() -> Self {
        Self::with_alloc_size(DEFAULT_ALLOC_SIZE)
    }

    /// Creates a new writer with a custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(alloc_size),
            alloc_size,
        }
    }

    /// Ensures at least `capacity` more bytes fit without reallocating.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.uint8.capacity() - self.uint8.len();
        if remaining < capacity {
            self.uint8.reserve(capacity.max(self.alloc_size));
        }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.uint8.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.uint8.is_empty()
    }

    /// Borrows everything written so far.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.uint8
    }

    /// Copies out everything written so far. The writer keeps its contents.
    pub fn to_vec(&self) -> Vec<u8> {
        self.uint8.clone()
    }

    /// Writes a single byte.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.uint8.push(val);
    }

    /// Writes a byte slice verbatim.
    pub fn buf(&mut self, buf: &[u8]) {
        self.ensure_capacity(buf.len());
        self.uint8.extend_from_slice(buf);
    }

    /// Writes a UTF-8 string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        let bytes = s.as_bytes();
        self.buf(bytes);
        bytes.len()
    }
}

//! Rolling checksum used to find context-dependent trigger points.
//!
//! A cheap Adler-style statistic over the last [`ROLLING_WINDOW`] bytes plus a
//! shift/xor term. It knows nothing about block sizes; callers test the
//! checksum against their own modulus.

/// Number of trailing bytes the checksum depends on.
pub const ROLLING_WINDOW: usize = 7;

#[derive(Debug, Clone, Default)]
pub struct RollingHash {
    window: [u8; ROLLING_WINDOW],
    h1: u32,
    h2: u32,
    h3: u32,
    n: usize,
}

impl RollingHash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes one byte, displacing the oldest byte of the window.
    #[inline]
    pub fn update(&mut self, c: u8) {
        let slot = self.n % ROLLING_WINDOW;
        let old = self.window[slot] as u32;
        let c32 = c as u32;

        self.h2 = self
            .h2
            .wrapping_sub(self.h1)
            .wrapping_add(ROLLING_WINDOW as u32 * c32);
        self.h1 = self.h1.wrapping_add(c32).wrapping_sub(old);
        self.h3 = (self.h3 << 5) ^ c32;

        self.window[slot] = c;
        self.n += 1;
    }

    #[inline]
    pub fn checksum(&self) -> u32 {
        self.h1.wrapping_add(self.h2).wrapping_add(self.h3)
    }

    /// Bytes seen since construction.
    pub fn count(&self) -> usize {
        self.n
    }
}

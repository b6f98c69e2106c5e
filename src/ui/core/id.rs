#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Id(pub u64);

impl Id {
    pub const fn raw(v: u64) -> Self {
        Self(v)
    }
}

/// Builds ids for hit-test nodes from a path of names.
///
/// FNV-1a 64-bit keeps ids identical across builds, so a node rebuilt on the
/// next frame gets the same id and hover state survives redraws.
#[derive(Clone, Copy, Debug)]
pub struct IdPath {
    h: u64,
}

impl IdPath {
    pub fn root(ns: &'static str) -> Self {
        Self {
            h: fnv1a64(FNV_OFFSET_BASIS_64, ns.as_bytes()),
        }
    }

    pub fn push_str(self, s: &str) -> Self {
        self.push_bytes(s.as_bytes())
    }

    pub fn finish(self) -> Id {
        Id(self.h)
    }

    fn push_bytes(mut self, bytes: &[u8]) -> Self {
        self.h = fnv1a64(self.h, bytes);
        // Separator so ("ab", "c") and ("a", "bc") differ.
        self.h = fnv1a64(self.h, &[0xff]);
        self
    }
}

const FNV_OFFSET_BASIS_64: u64 = 0xcbf29ce484222325;
const FNV_PRIME_64: u64 = 0x100000001b3;

fn fnv1a64(mut h: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(FNV_PRIME_64);
    }
    h
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/id.rs"]
mod tests;

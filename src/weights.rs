/// Cyclic per-position check digit weights. EAN-13 weights even (0-based)
/// positions 1 and odd positions 3; EAN-8 swaps the two. The swap is part of
/// the symbology definitions, not a bug.
#[derive(Copy, Clone, Debug)]
pub struct Weights {
    state: u8,
    even: u32,
    odd: u32,
}

impl Weights {
    pub fn ean13() -> Self {
        Weights {
            state: 0,
            even: 1,
            odd: 3,
        }
    }

    pub fn ean8() -> Self {
        Weights {
            state: 0,
            even: 3,
            odd: 1,
        }
    }
}

impl Iterator for Weights {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            0 => {
                self.state = 1;
                Some(self.even)
            }

            1 => {
                self.state = 0;
                Some(self.odd)
            }

            _ => unreachable!("Please do not call this code, kthx."),
        }
    }
}

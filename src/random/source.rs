//! Random source abstraction
//!
//! The grid engine only ever asks for inclusive integer draws, so that is the
//! whole contract. Production code uses [`crate::random::SeededRandom`]; tests
//! and replays inject a [`ScriptedSource`].

/// Source of uniform integer draws
pub trait RandomSource {
    /// Draw a value in `min..=max`
    fn integer(&mut self, min: u32, max: u32) -> u32;
}

impl<R> RandomSource for &mut R
where
    R: RandomSource + ?Sized,
{
    fn integer(&mut self, min: u32, max: u32) -> u32 {
        (**self).integer(min, max)
    }
}

/// Replays a fixed sequence of draws, cycling when it runs out
///
/// Draws are returned verbatim and are not clamped to the requested range.
/// An empty script always answers with `min`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: Vec<u32>,
    position: usize,
}

impl ScriptedSource {
    /// Create a source replaying `draws` in order
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        Self {
            draws: draws.into(),
            position: 0,
        }
    }

    /// A source that always answers with the bottom of the requested range
    pub fn minimum() -> Self {
        Self::default()
    }

    /// Number of draws served so far
    pub const fn served(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedSource {
    fn integer(&mut self, min: u32, _max: u32) -> u32 {
        let draw = if self.draws.is_empty() {
            min
        } else {
            self.draws
                .get(self.position % self.draws.len())
                .copied()
                .unwrap_or(min)
        };
        self.position += 1;
        draw
    }
}

//! Request tagging shared by the search and detail controllers.
//!
//! Every issued request carries the generation that was current when it was
//! issued. Responses are applied only while that generation is still the
//! latest one, so whichever request was issued last wins no matter in which
//! order the responses arrive.

/// Monotonic request tag.
pub type Generation = u64;

/// What happened to a settled response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The response belonged to the latest request and replaced state.
    Applied,
    /// A newer request was issued since; the response was dropped.
    Discarded,
    /// The latest request failed; state was left as it was.
    Failed,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct GenerationCounter {
    current: Generation,
}

impl GenerationCounter {
    pub(crate) fn next(&mut self) -> Generation {
        self.current += 1;
        self.current
    }

    pub(crate) fn current(&self) -> Generation {
        self.current
    }

    pub(crate) fn is_current(&self, generation: Generation) -> bool {
        generation == self.current
    }
}

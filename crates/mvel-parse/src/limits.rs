/// Safety ceilings applied while parsing.
///
/// Every ceiling is a hard cap enforced during construction: when one is
/// reached the current construct ends early and parsing carries on, so any
/// input yields a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Limits {
    /// Nesting depth of grammar calls. Also bounds the depth of the tree.
    pub max_depth: u32,
    /// Iterations of argument, list, array and parameter loops.
    pub max_iterations: u32,
    /// Length of binary-operator and `.name` chains.
    pub max_chain: u32,
    /// Iterations of a markup region body.
    pub max_region_iterations: u32,
    /// Statements attempted at the top level.
    pub max_top_level_iterations: u32,
}

impl Limits {
    /// Sets the two primary ceilings and derives the rest from
    /// `max_iterations` the way the defaults relate: chains get a tenth of it
    /// (at least 1), region bodies ten times it and the top level a hundred
    /// times.
    pub fn new(max_depth: u32, max_iterations: u32) -> Self {
        Self {
            max_depth,
            max_iterations,
            max_chain: (max_iterations / 10).max(1),
            max_region_iterations: max_iterations.saturating_mul(10),
            max_top_level_iterations: max_iterations.saturating_mul(100),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 1000,
            max_iterations: 1000,
            max_chain: 100,
            max_region_iterations: 10_000,
            max_top_level_iterations: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Limits;

    #[test]
    fn new_matches_default_at_default_ceilings() {
        assert_eq!(Limits::new(1000, 1000), Limits::default());
    }

    #[test]
    fn small_ceilings_keep_chains_open() {
        let limits = Limits::new(3, 4);
        assert_eq!(limits.max_chain, 1);
        assert_eq!(limits.max_region_iterations, 40);
        assert_eq!(limits.max_top_level_iterations, 400);
    }
}

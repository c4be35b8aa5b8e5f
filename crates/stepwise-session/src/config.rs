/// Driver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Milliseconds per step; 0 runs `steps_per_frame` steps every tick.
    pub delay_ms: u32,
    pub steps_per_frame: usize,
    /// Run the verification sweep once a sort completes.
    pub sweep_after_sort: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            steps_per_frame: 203,
            sweep_after_sort: true,
        }
    }
}

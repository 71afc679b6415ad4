use tremor_engine::input::{Input, Key};

/// Rising-edge detector over a fixed key set.
///
/// `Input` is level-triggered; scenes that act once per press (menu picks,
/// rhythm hits) run their keys through this.
#[derive(Debug, Clone)]
pub struct KeyEdges<const N: usize> {
    keys: [Key; N],
    last: [bool; N],
}

impl<const N: usize> KeyEdges<N> {
    pub fn new(keys: [Key; N]) -> Self {
        Self { keys, last: [false; N] }
    }

    /// Per key: down now and up at the previous call.
    pub fn pressed(&mut self, input: &Input) -> [bool; N] {
        let mut out = [false; N];
        for (i, key) in self.keys.iter().enumerate() {
            let down = input.is_key_down(*key);
            out[i] = down && !self.last[i];
            self.last[i] = down;
        }
        out
    }
}

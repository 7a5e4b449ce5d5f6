// ---------------------------------------------------------------------------
// Memo – a derived value recomputed only when its inputs change
// ---------------------------------------------------------------------------

/// Caches the value computed from the last input key.
///
/// egui redraws every frame, so derived values are pulled through a `Memo`
/// each frame: the computation runs again only when the key (the full set of
/// inputs it depends on) differs from the one it was last computed with.
#[derive(Debug)]
pub struct Memo<K, V> {
    cached: Option<(K, V)>,
    computations: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            cached: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq + Clone, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the value for `key`, computing it if the key changed.
    pub fn get(&mut self, key: &K, compute: impl FnOnce(&K) -> V) -> &V {
        let fresh = matches!(&self.cached, Some((cached, _)) if cached == key);
        if !fresh {
            self.cached = None;
        }

        let computations = &mut self.computations;
        let (_, value) = self.cached.get_or_insert_with(|| {
            *computations += 1;
            (key.clone(), compute(key))
        });
        value
    }

    /// How many times the value has been (re)computed.
    #[cfg(test)]
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

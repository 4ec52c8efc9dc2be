/// Per-cell traversal state for the current invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellState {
    pub g: u64,
    pub h: u64,
    pub depth: u32,
    pub predecessor: Option<usize>,
}

impl CellState {
    #[inline]
    pub fn f(&self) -> u64 { self.g + self.h }
}

const VISITED: u8 = 1 << 0;
const CLOSED: u8 = 1 << 1;

/// Mutable search state indexed by cell index.
///
/// Slots are invalidated lazily: `reset` bumps the generation, and a slot whose
/// stamp lags behind reads as a fresh default. Consecutive runs on one grid
/// therefore never observe each other's `g`/`h`/`depth`/predecessors.
pub struct SearchContext {
    state: Vec<CellState>,
    flags: Vec<u8>,
    stamp: Vec<u32>,
    generation: u32,
}

impl SearchContext {
    pub fn new(cells: usize) -> Self {
        Self {
            state: vec![CellState::default(); cells],
            flags: vec![0; cells],
            stamp: vec![0; cells],
            generation: 1,
        }
    }

    pub fn reset(&mut self, cells: usize) {
        if self.state.len() != cells {
            *self = Self::new(cells);
        } else {
            self.generation = self.generation.wrapping_add(1);
            if self.generation == 0 {
                self.stamp.fill(0);
                self.generation = 1;
            }
        }
    }

    pub fn len(&self) -> usize { self.state.len() }
    pub fn is_empty(&self) -> bool { self.state.is_empty() }

    #[inline(always)]
    fn touch(&mut self, u: usize) {
        if self.stamp[u] != self.generation {
            self.stamp[u] = self.generation;
            self.flags[u] = 0;
            self.state[u] = CellState::default();
        }
    }

    #[inline(always)]
    fn flag(&self, u: usize, bit: u8) -> bool {
        self.stamp[u] == self.generation && self.flags[u] & bit != 0
    }

    #[inline(always)]
    pub fn state(&self, u: usize) -> CellState {
        if self.stamp[u] == self.generation { self.state[u] } else { CellState::default() }
    }

    #[inline(always)]
    pub fn state_mut(&mut self, u: usize) -> &mut CellState {
        self.touch(u);
        &mut self.state[u]
    }

    #[inline(always)]
    pub fn is_visited(&self, u: usize) -> bool { self.flag(u, VISITED) }

    /// Marks `u` visited; returns false when it already was.
    #[inline(always)]
    pub fn mark_visited(&mut self, u: usize) -> bool {
        self.touch(u);
        let fresh = self.flags[u] & VISITED == 0;
        self.flags[u] |= VISITED;
        fresh
    }

    #[inline(always)]
    pub fn is_closed(&self, u: usize) -> bool { self.flag(u, CLOSED) }

    #[inline(always)]
    pub fn close(&mut self, u: usize) {
        self.touch(u);
        self.flags[u] |= CLOSED;
    }
}

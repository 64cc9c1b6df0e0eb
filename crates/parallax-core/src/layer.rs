use smallvec::SmallVec;

/// One image in the stack. Index 1 is the bottom layer and never moves.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub index: usize,
    pub source_id: String,
    pub depth_norm: f32,
    pub z_order: i32,
}

impl Layer {
    #[inline]
    pub fn is_static(&self) -> bool {
        self.depth_norm == 0.0
    }
}

/// Immutable, bottom-to-top ordered layer stack.
pub type LayerStack = SmallVec<[Layer; 8]>;

/// Normalized depth of `index` (1-based) in a stack of `count` layers.
#[inline]
pub fn depth_norm(index: usize, count: usize) -> f32 {
    if count > 1 {
        (index - 1) as f32 / (count - 1) as f32
    } else {
        0.0
    }
}

/// Derive the stack from ordered source ids. An empty list yields an empty
/// stack: the hero then renders only its overlay.
pub fn build_layers(source_ids: &[String]) -> LayerStack {
    let count = source_ids.len();
    source_ids
        .iter()
        .enumerate()
        .map(|(i, src)| {
            let index = i + 1;
            Layer {
                index,
                source_id: src.clone(),
                depth_norm: depth_norm(index, count),
                z_order: i32::try_from(index).unwrap_or(i32::MAX),
            }
        })
        .collect()
}

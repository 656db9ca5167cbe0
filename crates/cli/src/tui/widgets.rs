mod grid;

pub use grid::GridWidget;

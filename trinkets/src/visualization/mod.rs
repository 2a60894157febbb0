pub mod bindings;
pub mod pointer;
pub mod trinkets_vis2d;
pub mod trinkets_headless;

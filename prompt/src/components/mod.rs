// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod apply_style_macro;
pub mod select_component;
pub mod style;

// Re-export.
pub use apply_style_macro::*;
pub use select_component::*;
pub use style::*;

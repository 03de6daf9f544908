//! Interaction state machines driven by the presentation layer.
//!
//! # Responsibility
//! - Reduce raw pointer input into render-ready feedback and discrete
//!   store commands.
//!
//! # Invariants
//! - Reducers are pure over their own state; nothing here renders or
//!   depends on UI types.

pub mod swipe;

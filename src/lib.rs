//! Deterministic layout for stacked card decks.
//!
//! A deck is a list of sections, each holding items drawn as cards. A section is laid out in one
//! of three states:
//!
//! - **Collapsed**: cards overlap, each showing a peeking strip beneath the one above it. Cards
//!   deeper than the stack depth limit pile onto the last strip and are marked hidden.
//! - **Expanded**: every card fully visible, stacked downward with spacing.
//! - **Regular**: a flat list.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: the host supplies a [`Container`] (width and item counts) and a set of
//!    [`LayoutDelegates`] (section states, optional item and header/footer sizes).
//! 2. **Prepare**: [`CardStackLayout::prepare`] runs one pass and publishes a [`LayoutSnapshot`].
//! 3. **Query**: [`CardStackLayout::elements_intersecting`] and [`CardStackLayout::element_at`]
//!    serve the snapshot until the next pass.
//! 4. **Remove** (optional): [`CardStackLayout::exit_frame`] gives the off-screen placement of a
//!    card being deleted.
//!
//! Layout never fails. Bad lengths are clamped to zero, out-of-range lookups return `None`, and a
//! missing container produces an empty snapshot. Errors only come from parsing [`Deck`] and
//! [`LayoutConfig`] files.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod engine;
mod foundation;
mod layout;
mod model;
mod scene;
mod transition;

pub use config::layout_config::LayoutConfig;
pub use engine::layout_engine::CardStackLayout;
pub use foundation::core::{Affine, IndexPath, Point, Rect, Size};
pub use foundation::error::{CardStackError, CardStackResult};
pub use layout::geometry::{frame_for, horizontal_inset};
pub use layout::pass::prepare_snapshot;
pub use layout::providers::{
    Container, ItemSizeProvider, LayoutDelegates, SectionStateProvider, SupplementarySizeProvider,
};
pub use model::element::{ElementKind, PositionedElement};
pub use model::snapshot::{LayoutSnapshot, SectionLayout};
pub use model::state::SectionState;
pub use scene::deck::{Deck, DeckSection};
pub use transition::exit::{EXIT_LIFT, EXIT_ROTATION_RAD, ExitTransition, exit_frame};

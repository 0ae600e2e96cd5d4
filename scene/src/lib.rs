//! Scene core for the automation-cell designer.
//!
//! This crate is compiled to WebAssembly and runs in the browser next to the
//! 3D renderer. It owns everything about a layout except drawing it: the
//! registry of placed models, grid snapping, the cost table, room geometry,
//! the clipboard document format, and the controller that turns pointer and
//! keyboard events into scene mutations. The host JavaScript layer raycasts,
//! loads model assets, talks to the clipboard, and applies the resulting
//! [`engine::Action`]s to its scene graph.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Placement controller ([`engine::Editor`]) and its actions |
//! | [`doc`] | Placed-object records and the scene registry |
//! | [`catalog`] | Model templates and their asset load status |
//! | [`cost`] | Price table, total policy, and cost reports |
//! | [`codec`] | Clipboard JSON encode/decode with legacy support |
//! | [`config`] | Editor configuration (models, prices, initial room) |
//! | [`grid`] | Grid snapping |
//! | [`room`] | Room dimensions and wall layout |
//! | [`hit`] | Raycast results and the `RayCaster` seam |
//! | [`input`] | Modifiers, interaction modes, gizmo shortcuts |
//! | [`transfer`] | Busy gate for clipboard transfers |
//! | [`error`] | Error types, codes, and user notices |
//! | [`math`] | `Vec3` |
//! | [`consts`] | Shared numeric constants (grid cell, room defaults, etc.) |
//! | [`web`] | `wasm-bindgen` facade for the browser host |

pub mod catalog;
pub mod codec;
pub mod config;
pub mod consts;
pub mod cost;
pub mod doc;
pub mod engine;
pub mod error;
pub mod grid;
pub mod hit;
pub mod input;
pub mod math;
pub mod room;
pub mod transfer;
pub mod web;

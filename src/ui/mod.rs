//! UI module - contains HTML rendering components

pub mod components;

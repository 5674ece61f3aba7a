//! Kunai vCard tooling - integration test support.
//!
//! This crate re-exports the workspace crates so that integration tests can
//! reach every layer through `kunai_test::component` paths.

pub mod component {
    pub mod core {
        pub use kunai_core::*;
    }

    pub mod rfc {
        pub use kunai_rfc::*;
    }

    pub mod app {
        pub use kunai_app::*;
    }
}

//! Python bindings for the memory-maze engine.
//!
//! # Quick Start
//!
//! ```python
//! import memory_maze as mm
//!
//! session = mm.MemorySession(seed=42)
//!
//! session.click(0)
//! session.click(1)
//! session.tick(550)
//!
//! print(session.faces(), session.status, session.steps)
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// memory-maze: a memory-matching card game engine.
#[pymodule]
fn memory_maze(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMemorySession>()?;
    Ok(())
}

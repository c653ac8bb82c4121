// SPDX-License-Identifier: LGPL-3.0-or-later

mod index;
mod precision;
mod scope;

pub use index::*;
pub use precision::*;
pub use scope::*;

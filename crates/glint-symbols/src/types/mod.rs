// SPDX-License-Identifier: LGPL-3.0-or-later

mod basic;
mod constant;
mod extension;
mod operator;
mod ty;
mod version;

pub use basic::*;
pub use constant::*;
pub use extension::*;
pub use operator::*;
pub use ty::*;
pub use version::*;

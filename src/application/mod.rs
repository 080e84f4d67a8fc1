// SPDX-License-Identifier: MPL-2.0
//! Application layer: the ports the components depend on.

pub mod port;

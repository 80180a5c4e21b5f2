// SPDX-License-Identifier: MIT
pub mod digits;
pub mod document;
pub mod polynomial;

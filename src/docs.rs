// SPDX-FileCopyrightText: The decknav authors
// SPDX-License-Identifier: MPL-2.0

//! Documentation and specification

#![doc = include_str!("../README.md")]

// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod lighthouse;
pub mod process_launcher;
pub mod traits;

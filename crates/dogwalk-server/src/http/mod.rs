// SPDX-License-Identifier: Apache-2.0

pub(crate) mod cities;
pub(crate) mod dogs;
pub(crate) mod handlers;
pub(crate) mod request_tracing;
pub(crate) mod system;
pub(crate) mod walkers;

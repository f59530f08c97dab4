/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use tracing::{debug,warn};
use crate::{element::RejectedRecord, Epoch, TimeWindow, MAX_TERMINAL_PROPAGATION};

/// the result of filtering raw records against a requested window
#[derive(Debug)]
pub struct Admission<E> {
    pub elements: Vec<E>,                // in input order
    pub rejected: Vec<RejectedRecord>,   // malformed records
    pub n_outside: usize,                // well formed but outside the extended window
}

impl<E> Admission<E> {
    pub fn is_empty (&self)->bool { self.elements.is_empty() }
}

/// keep the elements whose epoch lies within `window` extended by [`MAX_TERMINAL_PROPAGATION`] on both sides.
/// Rejected records are skipped (and reported if `verbose` is set), they never abort the admission.
/// The input does not have to be chronological and admission does not sort
pub fn admit<E,I> (records: I, window: &TimeWindow, verbose: bool)->Admission<E>
    where E: Epoch, I: IntoIterator<Item=Result<E,RejectedRecord>>
{
    let extended = window.extended( MAX_TERMINAL_PROPAGATION);
    let mut elements: Vec<E> = Vec::new();
    let mut rejected: Vec<RejectedRecord> = Vec::new();
    let mut n_outside = 0;

    for rec in records {
        match rec {
            Ok(e) => {
                if extended.contains( &e.epoch()) {
                    elements.push(e);
                } else {
                    if verbose { debug!("element with epoch {} outside of admission window {}", e.epoch(), extended) }
                    n_outside += 1;
                }
            }
            Err(r) => {
                if verbose { warn!("{r}") }
                rejected.push(r);
            }
        }
    }

    debug!("admitted {} elements ({} rejected, {} outside {})", elements.len(), rejected.len(), n_outside, extended);
    Admission { elements, rejected, n_outside }
}

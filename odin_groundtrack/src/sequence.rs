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

use chrono::{DateTime,Utc};
use tracing::debug;
use crate::{Epoch, TimeWindow, MAX_TERMINAL_PROPAGATION};

/// epoch ordered elements of one ground track request, together with the window that is actually simulated
#[derive(Debug)]
pub struct ElementSequence<E> {
    elements: Vec<E>,
    requested: TimeWindow,
    effective: TimeWindow,
}

impl<E: Epoch> ElementSequence<E> {

    /// sort elements by epoch (stable, ties keep their input order) and roll back the end of the window if
    /// it extends more than [`MAX_TERMINAL_PROPAGATION`] past the last element
    pub fn new (mut elements: Vec<E>, requested: TimeWindow)->Self {
        elements.sort_by_key( |e| e.epoch());

        let effective = match elements.last() {
            Some(last) => {
                let max_end = last.epoch() + MAX_TERMINAL_PROPAGATION;
                if requested.end - last.epoch() > MAX_TERMINAL_PROPAGATION {
                    debug!("end of window clamped from {} to {}", requested.end, max_end);
                    requested.with_end( max_end)
                } else {
                    requested
                }
            }
            None => requested
        };

        ElementSequence { elements, requested, effective }
    }

    pub fn len (&self)->usize { self.elements.len() }

    pub fn is_empty (&self)->bool { self.elements.is_empty() }

    pub fn get (&self, idx: usize)->Option<&E> { self.elements.get(idx) }

    pub fn elements (&self)->&[E] { &self.elements }

    pub fn iter (&self)->impl Iterator<Item=&E> { self.elements.iter() }

    pub fn epoch (&self, idx: usize)->Option<DateTime<Utc>> { self.elements.get(idx).map(|e| e.epoch()) }

    pub fn last_epoch (&self)->Option<DateTime<Utc>> { self.elements.last().map(|e| e.epoch()) }

    /// the window as requested by the caller
    pub fn requested_window (&self)->&TimeWindow { &self.requested }

    /// the window that gets simulated, i.e. the requested one with a possibly clamped end
    pub fn effective_window (&self)->&TimeWindow { &self.effective }
}

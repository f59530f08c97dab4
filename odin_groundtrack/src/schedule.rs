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
use crate::{Epoch, ElementSequence, MAX_TERMINAL_PROPAGATION};

/// computes the instants at which simulation hands off from one element to the next.
/// The hand-off between two consecutive elements is the midpoint of their epochs. The last element has no
/// successor - its bound is the terminal propagation limit (epoch + [`MAX_TERMINAL_PROPAGATION`]).
/// Transitions are computed on demand, the simulator only ever asks for the next one
pub struct TransitionSchedule<'a,E> {
    seq: &'a ElementSequence<E>,
}

impl<'a,E: Epoch> TransitionSchedule<'a,E> {
    pub fn new (seq: &'a ElementSequence<E>)->Self {
        TransitionSchedule { seq }
    }

    /// the instant at which element `idx` hands off to `idx+1`, or the terminal bound if `idx` is the last
    /// element. Returns None if there is no element `idx`
    pub fn transition_time (&self, idx: usize)->Option<DateTime<Utc>> {
        let e = self.seq.epoch(idx)?;
        match self.seq.epoch(idx+1) {
            Some(e_next) => Some( midpoint( e, e_next)),
            None => Some( e + MAX_TERMINAL_PROPAGATION)
        }
    }

    /// is `idx` the last element, i.e. is its transition the terminal bound
    pub fn is_terminal (&self, idx: usize)->bool {
        idx + 1 >= self.seq.len()
    }

    /// all transitions in element order (for listings - the simulator does not use this)
    pub fn iter (&self)->impl Iterator<Item=DateTime<Utc>> + '_ {
        (0..self.seq.len()).filter_map( |i| self.transition_time(i))
    }
}

#[inline]
pub fn midpoint (t1: DateTime<Utc>, t2: DateTime<Utc>)->DateTime<Utc> {
    t1 + (t2 - t1) / 2
}

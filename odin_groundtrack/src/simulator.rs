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

use chrono::{DateTime,TimeDelta,Utc};
use tracing::debug;
use crate::{
    errors::{config_error,op_failed,OdinGroundtrackError,Result},
    propagator::Propagator,
    schedule::TransitionSchedule,
    track::TrackPoint,
    ElementSequence
};

/// the element that currently has simulation authority, with its propagator handle and the instant at which
/// it hands off to its successor (or the terminal bound if it is the last element)
pub struct ActiveElement<H> {
    pub index: usize,
    pub handle: H,
    pub next_transition: DateTime<Utc>,
}

pub enum SimState<H> {
    Idle,                     // nothing to simulate (no elements)
    Active(ActiveElement<H>),
    Done,
}

/// the time-stepped ground track loop. Starting at the begin of the effective window we sample the active element
/// every `time_step` until we reach the end of the window (exclusive). Before each sample we check if the active
/// element's transition has been reached, in which case we hand off to the successor. Ties (elements with identical
/// epochs) resolve to the later element since we keep handing off as long as the transition is reached
pub struct TrackSimulator<'a,P: Propagator> {
    seq: &'a ElementSequence<P::Element>,
    schedule: TransitionSchedule<'a,P::Element>,
    propagator: &'a P,
    time_step: TimeDelta,
}

impl<'a,P: Propagator> TrackSimulator<'a,P> {
    pub fn new (seq: &'a ElementSequence<P::Element>, propagator: &'a P, time_step: TimeDelta)->Result<Self> {
        if time_step <= TimeDelta::zero() {
            return Err( config_error!("time step has to be positive (got {} ms)", time_step.num_milliseconds()))
        }
        let schedule = TransitionSchedule::new(seq);
        Ok( TrackSimulator { seq, schedule, propagator, time_step } )
    }

    pub fn initial_state (&self)->Result<SimState<P::Handle>> {
        if self.seq.is_empty() {
            Ok( SimState::Idle )
        } else {
            Ok( SimState::Active( self.activate(0)?) )
        }
    }

    fn activate (&self, index: usize)->Result<ActiveElement<P::Handle>> {
        let element = self.seq.get(index).ok_or_else(|| op_failed!("no element {index}"))?;
        let handle = self.propagator.initialize( index, element)?;
        let next_transition = self.schedule.transition_time(index).ok_or_else(|| op_failed!("no transition for element {index}"))?;
        Ok( ActiveElement { index, handle, next_transition } )
    }

    /// hand off to the last successor whose predecessor's transition has been reached at `t`. Only the element
    /// that ends up active gets initialized, skipped elements are never sampled
    fn hand_off (&self, active: ActiveElement<P::Handle>, t: DateTime<Utc>)->Result<ActiveElement<P::Handle>> {
        let mut index = active.index;
        let mut transition = active.next_transition;
        while t >= transition && !self.schedule.is_terminal(index) {
            index += 1;
            transition = self.schedule.transition_time(index).ok_or_else(|| op_failed!("no transition for element {index}"))?;
        }

        if index == active.index {
            Ok(active)
        } else {
            debug!("switching from element {} to {} at {}", active.index, index, t);
            self.activate(index)
        }
    }

    /// one step of the state machine for time `t`, producing the next state and (if still active) a sample
    pub fn step (&self, state: SimState<P::Handle>, t: DateTime<Utc>)->Result<(SimState<P::Handle>, Option<TrackPoint>)> {
        match state {
            SimState::Active(active) if t < self.seq.effective_window().end => {
                let active = self.hand_off( active, t)?;
                let position = self.propagator.geodetic_position( &active.handle, t)?;
                let point = TrackPoint { time: t, position, element_index: active.index };
                Ok( (SimState::Active(active), Some(point)) )
            }
            SimState::Active(_) | SimState::Idle | SimState::Done => Ok( (SimState::Done, None) )
        }
    }

    /// run the simulation over the effective window of the sequence
    pub fn run (&self)->Result<Vec<TrackPoint>> {
        let window = self.seq.effective_window();
        let mut points: Vec<TrackPoint> = Vec::with_capacity( self.estimated_len());
        let mut state = self.initial_state()?;
        let mut t = window.start;

        loop {
            let (next_state, point) = self.step( state, t)?;
            match point {
                Some(p) => points.push(p),
                None => break
            }
            state = next_state;
            match t.checked_add_signed( self.time_step) {
                Some(t_next) => t = t_next,
                None => break // beyond representable time, hence past the end of the window
            }
        }

        debug!("simulated {} points over {}", points.len(), window);
        Ok(points)
    }

    fn estimated_len (&self)->usize {
        if self.seq.is_empty() { return 0 }
        let span = self.seq.effective_window().duration().num_milliseconds().max(0);
        let step = self.time_step.num_milliseconds().max(1);
        ((span / step) as usize + 1).min( 1 << 20)
    }
}

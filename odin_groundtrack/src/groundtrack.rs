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
use tracing::{info,warn};
use crate::{
    admission::admit,
    element::{Element,RejectedRecord},
    errors::Result,
    output::{render,OutputOptions},
    propagator::{Propagator,Sgp4Propagator},
    schedule::TransitionSchedule,
    simulator::TrackSimulator,
    track::GroundTrack,
    ElementSequence, Epoch, GroundtrackRequest, TimeWindow
};

/// one ground track generation request together with the elements that were admitted for it.
/// This owns the element sequence and the effective window for the lifetime of the request
pub struct Groundtrack<E> {
    request: GroundtrackRequest,
    seq: ElementSequence<E>,
    n_rejected: usize,
    n_outside: usize,
}

impl<E: Epoch> Groundtrack<E> {

    /// admit and sequence the provided records. Malformed records are skipped (and logged if `verbose` is set)
    pub fn new<I> (request: GroundtrackRequest, records: I, verbose: bool)->Self where I: IntoIterator<Item=std::result::Result<E,RejectedRecord>> {
        let admission = admit( records, &request.window, verbose);
        let n_rejected = admission.rejected.len();
        let n_outside = admission.n_outside;
        let seq = ElementSequence::new( admission.elements, request.window);

        Groundtrack { request, seq, n_rejected, n_outside }
    }

    pub fn request (&self)->&GroundtrackRequest { &self.request }

    pub fn elements (&self)->&[E] { self.seq.elements() }

    pub fn sequence (&self)->&ElementSequence<E> { &self.seq }

    pub fn effective_window (&self)->&TimeWindow { self.seq.effective_window() }

    pub fn n_rejected (&self)->usize { self.n_rejected }

    pub fn n_outside (&self)->usize { self.n_outside }

    /// the scheduled hand-off instants, one per element (the last one being the terminal bound)
    pub fn transitions (&self)->Vec<DateTime<Utc>> {
        TransitionSchedule::new( &self.seq).iter().collect()
    }

    /// simulate the track. Zero admitted elements produce an empty track, not an error
    pub fn generate<P> (&self, propagator: &P)->Result<GroundTrack> where P: Propagator<Element=E> {
        let simulator = TrackSimulator::new( &self.seq, propagator, self.request.time_step)?;
        let points = simulator.run()?;
        Ok( GroundTrack::new( self.request.time_step, *self.seq.effective_window(), points) )
    }
}

impl Groundtrack<Element> {

    /// the object name of the most recent element that has one
    pub fn object_name (&self)->Option<String> {
        self.seq.elements().iter().rev().find_map(|e| e.name()).map(|s| s.to_string())
    }

    pub fn sat_num (&self)->Option<u32> {
        self.seq.elements().last().map(|e| e.sat_num())
    }

    /// generate the track with SGP4 propagation
    pub fn generate_sgp4 (&self)->Result<GroundTrack> {
        if let Some(first) = self.seq.elements().first() {
            if self.seq.iter().any(|e| e.sat_num() != first.sat_num()) {
                warn!("elements of more than one object admitted, track is not meaningful");
            }
        }

        let track = self.generate( &Sgp4Propagator)?.with_name( self.object_name()).with_sat_num( self.sat_num());
        info!("{track}");
        Ok(track)
    }

    /// generate and render in one step. Nothing is rendered if the simulation fails
    pub fn generate_document (&self, opts: &OutputOptions)->Result<String> {
        let track = self.generate_sgp4()?;
        render( &track, opts)
    }
}

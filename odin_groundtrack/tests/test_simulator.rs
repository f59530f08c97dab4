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

use chrono::{DateTime,TimeDelta,TimeZone,Utc};
use odin_groundtrack::{
    errors::{propagation_error,OdinGroundtrackError,Result},
    geo::GeoPosition,
    simulator::TrackSimulator,
    ElementSequence, Groundtrack, GroundtrackRequest, Propagator, RejectedRecord, TimeWindow
};

/// a propagator that reports the active element index as longitude, optionally failing to initialize a given
/// element or to propagate at a given time
struct MockPropagator {
    fail_init: Option<usize>,
    fail_at: Option<DateTime<Utc>>,
}

impl Propagator for MockPropagator {
    type Element = DateTime<Utc>;
    type Handle = usize;

    fn initialize (&self, index: usize, element: &DateTime<Utc>)->Result<usize> {
        if self.fail_init == Some(index) {
            return Err( propagation_error( index, *element, "mock initialization failure"))
        }
        Ok(index)
    }

    fn geodetic_position (&self, handle: &usize, t: DateTime<Utc>)->Result<GeoPosition> {
        if self.fail_at == Some(t) {
            return Err( propagation_error( *handle, t, "mock failure"))
        }
        Ok( GeoPosition::new( *handle as f64, 0.0, 800_000.0) )
    }
}

const MOCK: MockPropagator = MockPropagator { fail_init: None, fail_at: None };

fn t0 ()->DateTime<Utc> {
    Utc.with_ymd_and_hms( 2025, 3, 17, 0, 0, 0).unwrap()
}

fn hours (h: i64)->TimeDelta { TimeDelta::hours(h) }

fn groundtrack (epochs: &[DateTime<Utc>], end: DateTime<Utc>, time_step: TimeDelta)->Groundtrack<DateTime<Utc>> {
    let request = GroundtrackRequest::new( t0(), end, time_step).unwrap();
    let records: Vec<std::result::Result<DateTime<Utc>,RejectedRecord>> = epochs.iter().map(|e| Ok(*e)).collect();
    Groundtrack::new( request, records, false)
}

#[test]
fn test_two_element_hand_off () {
    let gt = groundtrack( &[t0(), t0() + hours(4)], t0() + hours(8), hours(1));
    assert_eq!( gt.effective_window().end, t0() + hours(8));
    assert_eq!( gt.transitions()[0], t0() + hours(2));

    let track = gt.generate( &MOCK).unwrap();
    println!("{track}");
    for p in track.iter() { println!("  {} : {}", p.time, p.element_index) }

    assert_eq!( track.len(), 8);
    let times: Vec<DateTime<Utc>> = track.iter().map(|p| p.time).collect();
    let expected_times: Vec<DateTime<Utc>> = (0..8).map(|h| t0() + hours(h)).collect();
    assert_eq!( times, expected_times);

    let indices: Vec<usize> = track.iter().map(|p| p.element_index).collect();
    assert_eq!( indices, vec![0, 0, 1, 1, 1, 1, 1, 1]);
    assert!( track.iter().all(|p| p.position.longitude_deg == p.element_index as f64));
}

#[test]
fn test_single_element_clamped () {
    let gt = groundtrack( &[t0()], t0() + TimeDelta::days(10), TimeDelta::days(1));
    assert_eq!( gt.effective_window().end, t0() + TimeDelta::days(7));

    let track = gt.generate( &MOCK).unwrap();
    assert_eq!( track.len(), 7);
    assert_eq!( track.end(), Some( t0() + TimeDelta::days(6)));
    assert!( track.iter().all(|p| p.element_index == 0));
}

#[test]
fn test_no_elements () {
    let gt = groundtrack( &[], t0() + hours(8), hours(1));
    let track = gt.generate( &MOCK).unwrap();
    assert!( track.is_empty());
    assert_eq!( track.start(), None);

    // elements outside of the admission window are the same as no elements
    let gt = groundtrack( &[t0() - TimeDelta::days(8)], t0() + hours(8), hours(1));
    assert_eq!( gt.n_outside(), 1);
    assert!( gt.generate( &MOCK).unwrap().is_empty());
}

#[test]
fn test_empty_window () {
    let gt = groundtrack( &[t0()], t0(), hours(1));
    assert!( gt.generate( &MOCK).unwrap().is_empty());
}

#[test]
fn test_invalid_time_step () {
    assert!( matches!( GroundtrackRequest::new( t0(), t0() + hours(1), TimeDelta::zero()), Err(OdinGroundtrackError::ConfigError(_))));

    let seq = ElementSequence::new( vec![t0()], TimeWindow::new( t0(), t0() + hours(1)));
    assert!( TrackSimulator::new( &seq, &MOCK, TimeDelta::zero()).is_err());
    assert!( TrackSimulator::new( &seq, &MOCK, TimeDelta::seconds(-60)).is_err());
}

#[test]
fn test_propagation_failure_is_fatal () {
    let gt = groundtrack( &[t0(), t0() + hours(4)], t0() + hours(8), hours(1));
    let propagator = MockPropagator { fail_init: None, fail_at: Some( t0() + hours(3)) };

    match gt.generate( &propagator) {
        Err(OdinGroundtrackError::PropagationError { index, time, .. }) => {
            assert_eq!( index, 1);
            assert_eq!( time, t0() + hours(3));
        }
        other => panic!("expected propagation error, got {:?}", other.map(|track| track.len()))
    }
}

#[test]
fn test_elements_before_window () {
    // the first element's transition precedes the window start, we hand off before the first sample
    let gt = groundtrack( &[t0() - TimeDelta::days(1), t0() + TimeDelta::days(1)], t0() + TimeDelta::days(2), hours(6));
    let track = gt.generate( &MOCK).unwrap();
    assert_eq!( track.len(), 8);
    assert!( track.iter().all(|p| p.element_index == 1));
}

#[test]
fn test_tied_epochs () {
    // later element wins at a tied instant
    let gt = groundtrack( &[t0(), t0() + hours(2), t0() + hours(2)], t0() + hours(4), hours(1));
    let track = gt.generate( &MOCK).unwrap();

    let indices: Vec<usize> = track.iter().map(|p| p.element_index).collect();
    assert_eq!( indices, vec![0, 1, 2, 2]);
}

#[test]
fn test_monotone_element_index () {
    let epochs: Vec<DateTime<Utc>> = [13, 1, 7, 22, 5, 5, 17].iter().map(|h| t0() + hours(*h)).collect();
    let gt = groundtrack( &epochs, t0() + hours(30), TimeDelta::minutes(10));
    let track = gt.generate( &MOCK).unwrap();
    let transitions = gt.transitions();

    assert_eq!( track.len(), 180);
    for w in track.points.windows(2) {
        assert!( w[0].element_index <= w[1].element_index);
        assert_eq!( w[1].time - w[0].time, TimeDelta::minutes(10));
    }
    for p in track.iter() {
        // a point is never sampled at or past the transition of its element (unless it is the last one)
        let i = p.element_index;
        assert!( i + 1 == transitions.len() || p.time < transitions[i]);
        if i > 0 { assert!( p.time >= transitions[i-1]) }
    }
    assert_eq!( track.points.last().map(|p| p.element_index), Some( epochs.len() - 1));
}

#[test]
fn test_skipped_elements_are_not_initialized () {
    // transitions at T0+30min and T0+90min are both passed between the samples at T0 and T0+2h
    let epochs = [t0(), t0() + hours(1), t0() + hours(2)];
    let gt = groundtrack( &epochs, t0() + hours(4), hours(2));

    let track = gt.generate( &MOCK).unwrap();
    let indices: Vec<usize> = track.iter().map(|p| p.element_index).collect();
    assert_eq!( indices, vec![0, 2]);

    // an element that is never sampled can't abort the run
    let propagator = MockPropagator { fail_init: Some(1), fail_at: None };
    let track = gt.generate( &propagator).unwrap();
    assert_eq!( track.len(), 2);

    // but the active one does
    let propagator = MockPropagator { fail_init: Some(2), fail_at: None };
    assert!( matches!( gt.generate( &propagator), Err(OdinGroundtrackError::PropagationError { index: 2, .. })));
}

#[test]
fn test_huge_time_step () {
    // the step is valid but the second sample time is not representable
    let request = GroundtrackRequest::from_specs( "2025-03-17 00:00:00", "2025-03-17 01:00:00", 9_000_000_000_000_000).unwrap();
    let records: Vec<std::result::Result<DateTime<Utc>,RejectedRecord>> = vec![ Ok(t0()) ];
    let gt = Groundtrack::new( request, records, false);

    let track = gt.generate( &MOCK).unwrap();
    assert_eq!( track.len(), 1);
    assert_eq!( track.start(), Some( t0()));
}

//! Tests for inv-sim: engine mechanics, run control, and invariants.

use inv_core::{AgentId, Iteration, ScriptedRng, SimConfig};
use inv_map::{Graph, load_lines};

use crate::{DestructionEvent, SimObserver, SimStats, TickSummary};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Five cities in an east-west ring.
const RING: &str = "\
A east=B west=E
B east=C west=A
C east=D west=B
D east=E west=C
E east=A west=D
";

/// Two cities joined by a single road pair.
const PAIR: &str = "A east=B\nB west=A\n";

/// Three cities in a line: A ↔ B ↔ C.
const LINE: &str = "A east=B\nB west=A east=C\nC west=B\n";

fn graph(text: &str) -> Graph {
    load_lines(text.lines()).unwrap()
}

/// Collects everything an observer can see.
#[derive(Default)]
struct Recorder {
    deploy_starts: Vec<(Iteration, u32)>,
    placements:    Vec<(Iteration, AgentId, String)>,
    destructions:  Vec<DestructionEvent>,
    ticks:         Vec<(Iteration, TickSummary)>,
    all_destroyed: Vec<(Iteration, usize)>,
    exhausted:     Vec<Iteration>,
    ends:          Vec<SimStats>,
}

impl SimObserver for Recorder {
    fn on_deploy_start(&mut self, iteration: Iteration, agents: u32) {
        self.deploy_starts.push((iteration, agents));
    }
    fn on_agent_placed(&mut self, iteration: Iteration, agent: AgentId, city: &str) {
        self.placements.push((iteration, agent, city.to_owned()));
    }
    fn on_city_destroyed(&mut self, event: &DestructionEvent) {
        self.destructions.push(event.clone());
    }
    fn on_tick_end(&mut self, iteration: Iteration, summary: &TickSummary) {
        self.ticks.push((iteration, *summary));
    }
    fn on_all_destroyed(&mut self, iteration: Iteration, max_cities: usize) {
        self.all_destroyed.push((iteration, max_cities));
    }
    fn on_budget_exhausted(&mut self, iteration: Iteration) {
        self.exhausted.push(iteration);
    }
    fn on_sim_end(&mut self, stats: &SimStats) {
        self.ends.push(stats.clone());
    }
}

// ── Engine: move-into and destruction ─────────────────────────────────────────

#[cfg(test)]
mod move_into {
    use super::*;
    use crate::{MoveOutcome, MovementEngine, NoopObserver};

    #[test]
    fn empty_city_takes_the_alien() {
        let mut engine = MovementEngine::new(graph(PAIR));
        let outcome = engine.move_into("A", AgentId(1), Iteration::ZERO, &mut NoopObserver);
        assert_eq!(outcome, Some(MoveOutcome::Placed));
        assert_eq!(engine.graph.get("A").unwrap().occupant, Some(AgentId(1)));
        assert_eq!(engine.moves, 1);
    }

    #[test]
    fn occupied_city_is_destroyed_with_its_back_roads() {
        let mut engine = MovementEngine::new(graph(LINE));
        let mut rec = Recorder::default();
        engine.move_into("B", AgentId(1), Iteration(4), &mut rec);
        let outcome = engine.move_into("B", AgentId(2), Iteration(4), &mut rec);

        let expected = DestructionEvent {
            iteration: Iteration(4),
            city:      "B".into(),
            aliens:    [AgentId(1), AgentId(2)],
        };
        assert_eq!(outcome, Some(MoveOutcome::Destroyed(expected.clone())));
        assert_eq!(rec.destructions, vec![expected]);
        assert!(!engine.graph.contains("B"));
        assert!(engine.graph.get("A").unwrap().is_dead_end());
        assert!(engine.graph.get("C").unwrap().is_dead_end());
        assert_eq!(engine.moves, 2);
    }

    #[test]
    fn missing_city_is_ignored() {
        let mut engine = MovementEngine::new(graph(PAIR));
        let outcome = engine.move_into("Z", AgentId(1), Iteration::ZERO, &mut NoopObserver);
        assert_eq!(outcome, None);
        assert_eq!(engine.moves, 0);
    }
}

// ── Engine: deployment ────────────────────────────────────────────────────────

#[cfg(test)]
mod deploy {
    use super::*;
    use crate::MovementEngine;

    #[test]
    fn scripted_deploy_places_each_alien() {
        let mut engine = MovementEngine::new(graph(RING));
        let mut rng = ScriptedRng::new(vec![0, 2, 4]);
        let mut rec = Recorder::default();
        let n = engine.deploy(3, Iteration::ZERO, &mut rng, &mut rec);

        assert_eq!(n, 3);
        let occ: Vec<_> = engine.graph.occupants().collect();
        assert_eq!(occ, vec![("A", AgentId(1)), ("C", AgentId(2)), ("E", AgentId(3))]);
        assert!(rec.destructions.is_empty());
        assert_eq!(rec.placements.len(), 3);
    }

    #[test]
    fn later_alien_can_destroy_earlier_ones_city() {
        // Always pick index 0 of the *current* name list.
        let mut engine = MovementEngine::new(graph(RING));
        let mut rng = ScriptedRng::first();
        let mut rec = Recorder::default();
        engine.deploy(3, Iteration::ZERO, &mut rng, &mut rec);

        // 1 → A, 2 → A (destroyed), 3 → B (now first in name order).
        assert_eq!(rec.destructions.len(), 1);
        assert_eq!(rec.destructions[0].city, "A");
        assert_eq!(rec.destructions[0].aliens, [AgentId(1), AgentId(2)]);
        assert!(!engine.graph.contains("A"));
        assert_eq!(engine.graph.get("B").unwrap().occupant, Some(AgentId(3)));
        assert_eq!(engine.moves, 3);
    }

    #[test]
    fn deploy_stops_when_no_city_is_left() {
        let mut engine = MovementEngine::new(graph("Solo\n"));
        let mut rng = ScriptedRng::first();
        let n = engine.deploy(5, Iteration::ZERO, &mut rng, &mut Recorder::default());
        assert_eq!(n, 2);
        assert!(engine.graph.is_empty());
        assert_eq!(rng.calls(), 2);
    }

    #[test]
    fn second_deploy_continues_ids() {
        let mut engine = MovementEngine::new(graph(RING));
        let mut rng = ScriptedRng::new(vec![0, 1, 2, 3]);
        let mut rec = Recorder::default();
        engine.deploy(2, Iteration::ZERO, &mut rng, &mut rec);
        engine.deploy(2, Iteration::ZERO, &mut rng, &mut rec);

        let ids: Vec<_> = rec.placements.iter().map(|(_, id, _)| *id).collect();
        assert_eq!(ids, vec![AgentId(1), AgentId(2), AgentId(3), AgentId(4)]);
        assert_eq!(engine.graph.occupied_count(), 4);
    }

    #[test]
    fn zero_aliens_is_a_noop() {
        let mut engine = MovementEngine::new(graph(RING));
        let n = engine.deploy(0, Iteration::ZERO, &mut ScriptedRng::first(), &mut Recorder::default());
        assert_eq!(n, 0);
        assert_eq!(engine.graph.occupied_count(), 0);
    }
}

// ── Engine: one tick ──────────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use super::*;
    use crate::{MovementEngine, NoopObserver};

    fn place(engine: &mut MovementEngine, city: &str, agent: u32) {
        engine.move_into(city, AgentId(agent), Iteration::ZERO, &mut NoopObserver);
    }

    #[test]
    fn pair_collision_destroys_exactly_one_city() {
        let mut engine = MovementEngine::new(graph(PAIR));
        place(&mut engine, "A", 1);
        place(&mut engine, "B", 2);

        let mut rec = Recorder::default();
        let summary = engine.step(Iteration(1), &mut ScriptedRng::first(), &mut rec);

        assert_eq!(summary.destroyed, 1);
        assert_eq!(engine.graph.city_names().len(), 1);
        assert_eq!(rec.destructions.len(), 1);
        // The surviving city was vacated by the alien that caused the collision.
        assert_eq!(engine.graph.occupied_count(), 0);
    }

    #[test]
    fn alien_moves_along_its_only_road() {
        let mut engine = MovementEngine::new(graph(LINE));
        place(&mut engine, "A", 1);
        let summary = engine.step(Iteration(1), &mut ScriptedRng::first(), &mut NoopObserver);

        assert_eq!(summary.moved, 1);
        assert_eq!(engine.graph.get("A").unwrap().occupant, None);
        assert_eq!(engine.graph.get("B").unwrap().occupant, Some(AgentId(1)));
    }

    #[test]
    fn arrival_city_is_not_processed_again_in_the_same_tick() {
        // Without the guard, B (visited after A) would send alien 1 straight
        // back to A within the same tick.
        let mut engine = MovementEngine::new(graph(PAIR));
        place(&mut engine, "A", 1);
        let mut rng = ScriptedRng::first();
        engine.step(Iteration(1), &mut rng, &mut NoopObserver);

        assert_eq!(engine.graph.get("B").unwrap().occupant, Some(AgentId(1)));
        assert_eq!(rng.calls(), 1);
    }

    #[test]
    fn random_index_chooses_among_canonical_directions() {
        // B has roads west=A (index 0 of targets) and east=C (index 1).
        let mut engine = MovementEngine::new(graph(LINE));
        place(&mut engine, "B", 7);
        engine.step(Iteration(1), &mut ScriptedRng::new(vec![0]), &mut NoopObserver);
        // Canonical order is north, east, south, west → targets [C, A].
        assert_eq!(engine.graph.get("C").unwrap().occupant, Some(AgentId(7)));
    }

    #[test]
    fn alien_in_dead_end_is_stranded() {
        let mut engine = MovementEngine::new(graph("Island\nA east=B\nB west=A\n"));
        place(&mut engine, "Island", 1);
        let mut rng = ScriptedRng::first();
        for i in 1..=5 {
            let summary = engine.step(Iteration(i), &mut rng, &mut NoopObserver);
            assert_eq!(summary.stranded, 1);
            assert_eq!(summary.moved, 0);
        }
        assert_eq!(engine.graph.get("Island").unwrap().occupant, Some(AgentId(1)));
        assert_eq!(rng.calls(), 0);
    }

    #[test]
    fn collision_isolates_neighbors() {
        // A→B destroys B; C loses its only road and its alien is stranded.
        let mut engine = MovementEngine::new(graph(LINE));
        place(&mut engine, "A", 1);
        place(&mut engine, "B", 2);
        place(&mut engine, "C", 3);
        let summary = engine.step(Iteration(1), &mut ScriptedRng::first(), &mut NoopObserver);

        assert_eq!(summary.destroyed, 1);
        assert_eq!(summary.stranded, 1);
        assert_eq!(summary.cities, 2);
        assert_eq!(summary.occupied, 1);
        assert_eq!(engine.graph.get("C").unwrap().occupant, Some(AgentId(3)));
    }
}

// ── Run controller ────────────────────────────────────────────────────────────

#[cfg(test)]
mod run {
    use super::*;
    use crate::{NoopObserver, Outcome, SimBuilder, SimError};

    #[test]
    fn single_alien_on_ring_never_destroys_anything() {
        let config = SimConfig::new(1).with_iterations(10).with_seed(42);
        let mut sim = SimBuilder::new(config, graph(RING)).build().unwrap();
        let mut rec = Recorder::default();
        let stats = sim.run(&mut rec);

        assert!(rec.destructions.is_empty());
        assert_eq!(sim.graph().len(), 5);
        assert_eq!(stats.outcome, Outcome::BudgetExhausted);
        assert_eq!(stats.iterations, 10);
        assert_eq!(stats.destroyed(), 0);
        assert_eq!(stats.remaining, 5);
        // One deployment placement plus one move per tick.
        assert_eq!(stats.moves, 11);
        assert_eq!(rec.ticks.len(), 10);
        assert_eq!(rec.exhausted, vec![Iteration(10)]);
    }

    #[test]
    fn forced_pair_collision_leaves_one_city() {
        let config = SimConfig::new(0).with_iterations(1);
        let mut sim = SimBuilder::new(config, graph(PAIR))
            .rng(ScriptedRng::first())
            .build()
            .unwrap();
        sim.engine.move_into("A", AgentId(1), Iteration::ZERO, &mut NoopObserver);
        sim.engine.move_into("B", AgentId(2), Iteration::ZERO, &mut NoopObserver);

        let summary = sim.tick(&mut NoopObserver);
        assert_eq!(summary.destroyed, 1);
        assert_eq!(sim.graph().city_names().len(), 1);
        assert_eq!(sim.iteration, Iteration(1));
    }

    #[test]
    fn exhaustion_during_deployment_ends_the_run() {
        let config = SimConfig::new(4).with_iterations(100);
        let mut sim = SimBuilder::new(config, graph(PAIR))
            .rng(ScriptedRng::first())
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let stats = sim.run(&mut rec);

        assert_eq!(stats.outcome, Outcome::AllDestroyed);
        assert_eq!(stats.iterations, 0);
        assert_eq!(stats.deployed, 4);
        assert_eq!(stats.destroyed(), 2);
        assert_eq!(stats.remaining, 0);
        assert_eq!(rec.all_destroyed, vec![(Iteration(0), 2)]);
        assert!(rec.ticks.is_empty());
        assert!(rec.exhausted.is_empty());
    }

    #[test]
    fn sim_end_fires_once_on_every_exit_path() {
        let mut rec = Recorder::default();
        SimBuilder::new(SimConfig::new(1).with_iterations(3).with_seed(1), graph(RING))
            .build()
            .unwrap()
            .run(&mut rec);
        assert_eq!(rec.ends.len(), 1);

        let mut rec = Recorder::default();
        SimBuilder::new(SimConfig::new(2), graph("Solo\n"))
            .build()
            .unwrap()
            .run(&mut rec);
        assert_eq!(rec.ends.len(), 1);
        assert_eq!(rec.ends[0].outcome, Outcome::AllDestroyed);
    }

    #[test]
    fn deploy_start_reports_requested_count() {
        let mut rec = Recorder::default();
        SimBuilder::new(SimConfig::new(3).with_iterations(0).with_seed(5), graph(RING))
            .build()
            .unwrap()
            .run(&mut rec);
        assert_eq!(rec.deploy_starts, vec![(Iteration(0), 3)]);
        assert_eq!(rec.exhausted, vec![Iteration(0)]);
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed: u64| {
            let mut rec = Recorder::default();
            let stats = SimBuilder::new(
                SimConfig::new(12).with_iterations(50).with_seed(seed),
                inv_map::grid(4, 4).unwrap(),
            )
            .build()
            .unwrap()
            .run(&mut rec);
            (stats, rec.destructions)
        };
        assert_eq!(run(2024), run(2024));
    }

    #[test]
    fn run_ticks_stops_on_request() {
        let mut sim = SimBuilder::new(SimConfig::new(2).with_seed(3), graph(RING))
            .build()
            .unwrap();
        sim.deploy(&mut NoopObserver);
        assert_eq!(sim.run_ticks(4, &mut NoopObserver), 4);
        assert_eq!(sim.iteration, Iteration(4));
    }

    #[test]
    fn max_cities_is_recorded_at_build() {
        let sim = SimBuilder::new(SimConfig::new(1), graph(RING)).build().unwrap();
        assert_eq!(sim.max_cities, 5);
    }

    #[test]
    fn sim_debug_output_names_its_state() {
        let sim = SimBuilder::new(SimConfig::new(1), graph(PAIR))
            .rng(ScriptedRng::first())
            .build()
            .unwrap();
        let text = format!("{sim:?}");
        assert!(text.contains("max_cities: 2"));
        assert!(text.contains("next_agent"));
    }

    #[test]
    fn repeated_sim_deploy_never_reuses_an_id() {
        let mut sim = SimBuilder::new(SimConfig::new(2), graph(RING))
            .rng(ScriptedRng::new(vec![0, 1, 2, 3]))
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.deploy(&mut rec);
        sim.deploy(&mut rec);

        assert_eq!(sim.deployed, 4);
        let occ: Vec<_> = sim.graph().occupants().map(|(_, id)| id).collect();
        assert_eq!(occ, vec![AgentId(1), AgentId(2), AgentId(3), AgentId(4)]);
    }

    #[test]
    fn empty_map_is_rejected() {
        let err = SimBuilder::new(SimConfig::new(1), Graph::new()).build().unwrap_err();
        assert!(matches!(err, SimError::EmptyMap));
    }

    #[test]
    fn asymmetric_hand_built_graph_is_rejected() {
        use inv_core::Direction;
        use inv_map::City;

        let mut g = Graph::new();
        g.add_city(City::new("A").with_road(Direction::East, "B")).unwrap();
        g.add_city(City::new("B")).unwrap();
        let err = SimBuilder::new(SimConfig::new(1), g).build().unwrap_err();
        assert!(matches!(err, SimError::Map(_)));
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use crate::{Outcome, SimStats};

    fn stats(max_cities: usize, remaining: usize) -> SimStats {
        SimStats {
            iterations: 10,
            moves:      20,
            deployed:   4,
            max_cities,
            remaining,
            outcome:    Outcome::BudgetExhausted,
        }
    }

    #[test]
    fn singular_phrase_for_one_city() {
        assert_eq!(stats(5, 4).to_string(), "1 city was destroyed out of 5, 4 remained");
    }

    #[test]
    fn plural_phrase_otherwise() {
        assert_eq!(stats(5, 5).to_string(), "0 cities were destroyed out of 5, 5 remained");
        assert_eq!(stats(5, 2).to_string(), "3 cities were destroyed out of 5, 2 remained");
    }

    #[test]
    fn outcome_labels() {
        assert_eq!(Outcome::AllDestroyed.to_string(), "all_destroyed");
        assert_eq!(Outcome::BudgetExhausted.as_str(), "budget_exhausted");
    }
}

// ── Observer composition ──────────────────────────────────────────────────────

#[cfg(test)]
mod observers {
    use super::*;
    use crate::SimBuilder;

    #[test]
    fn pair_and_option_forward_events() {
        let config = SimConfig::new(4).with_iterations(5);
        let mut sim = SimBuilder::new(config, graph(PAIR))
            .rng(ScriptedRng::first())
            .build()
            .unwrap();

        let mut sinks = (Recorder::default(), Some(Recorder::default()));
        sim.run(&mut sinks);

        let (first, second) = sinks;
        let second = second.unwrap();
        assert_eq!(first.destructions.len(), 2);
        assert_eq!(first.destructions, second.destructions);
        assert_eq!(first.ends, second.ends);
    }

    #[test]
    fn none_swallows_events() {
        let mut sink: Option<Recorder> = None;
        SimBuilder::new(SimConfig::new(2).with_seed(9), graph(RING))
            .build()
            .unwrap()
            .run(&mut sink);
        assert!(sink.is_none());
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::{MovementEngine, NoopObserver, SimBuilder};
    use inv_core::SimRng;

    proptest! {
        #[test]
        fn deployment_accounts_for_every_alien(
            seed   in any::<u64>(),
            agents in 0u32..60,
            width  in 1u32..6,
            height in 1u32..6,
        ) {
            let mut engine = MovementEngine::new(inv_map::grid(width, height).unwrap());
            let mut rec = Recorder::default();
            let deployed = engine.deploy(agents, Iteration::ZERO, &mut SimRng::new(seed), &mut rec);

            let occupied = engine.graph.occupied_count();
            let destroyed = rec.destructions.len();
            if destroyed == 0 {
                prop_assert_eq!(occupied, agents as usize);
                prop_assert_eq!(deployed, agents);
            } else {
                prop_assert!(occupied < agents as usize);
                prop_assert!(destroyed + occupied <= agents as usize);
            }
            // Each destruction consumes exactly two aliens.
            prop_assert_eq!(occupied + 2 * destroyed, deployed as usize);
        }

        #[test]
        fn occupants_never_exceed_cities(
            seed   in any::<u64>(),
            agents in 0u32..40,
            ticks  in 0u64..30,
            width  in 1u32..6,
            height in 1u32..6,
        ) {
            let config = SimConfig::new(agents).with_seed(seed);
            let mut sim = SimBuilder::new(config, inv_map::grid(width, height).unwrap())
                .build()
                .unwrap();
            sim.deploy(&mut NoopObserver);
            prop_assert!(sim.graph().occupied_count() <= sim.graph().len());
            for _ in 0..ticks {
                if sim.graph().is_empty() {
                    break;
                }
                sim.tick(&mut NoopObserver);
                prop_assert!(sim.graph().occupied_count() <= sim.graph().len());
                prop_assert!(sim.graph().validate().is_ok());
            }
        }
    }
}

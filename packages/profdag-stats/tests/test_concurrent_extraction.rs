//! Extraction running concurrently with net execution, stats resets and
//! registry churn on other threads.

use profdag_runtime::{NetDef, OperatorDef, ProfilingOptions, Workspace};
use profdag_stats::{deserialize, ErrorKind, GetProfDagStatsOp, OutputSlot, ProfStatsConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

fn def(name: &str) -> NetDef {
    NetDef::new(
        name,
        vec![
            OperatorDef::of_type("FC"),
            OperatorDef::of_type("Relu"),
            OperatorDef::of_type("FC"),
        ],
    )
}

#[test]
fn test_snapshots_stay_consistent_while_net_runs() {
    let ws = Arc::new(Workspace::new());
    let net = ws.create_net(def("train_net"), ProfilingOptions { warmup_runs: 0 });
    let op = GetProfDagStatsOp::new(ProfStatsConfig::exact("train_net").per_op(true), ws.clone())
        .unwrap();
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..500 {
                net.record_run(&[1.0, 2.0, 3.0]).unwrap();
            }
            done.store(true, Ordering::SeqCst);
        });

        let mut output = OutputSlot::new();
        let mut last_count = 0;
        while !done.load(Ordering::SeqCst) {
            op.run(&mut output).unwrap();
            let record = deserialize(output.get(0).unwrap()).unwrap();
            if record.is_empty() {
                continue;
            }
            // Every node saw the same number of runs in one snapshot
            let count = record.stats[0].execution_time.count;
            assert!(record.stats.iter().all(|e| e.execution_time.count == count));
            assert!(count >= last_count);
            last_count = count;
        }
    });

    let record = op.fetch().unwrap();
    assert_eq!(record.stats[0].execution_time.count, 500);
}

#[test]
fn test_resets_surface_only_as_retryable_errors() {
    let ws = Arc::new(Workspace::new());
    let net = ws.create_net(def("train_net"), ProfilingOptions { warmup_runs: 0 });
    let op = GetProfDagStatsOp::new(ProfStatsConfig::partial("train"), ws.clone()).unwrap();
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        s.spawn(|| {
            for i in 0..200 {
                net.record_run(&[1.0, 1.0, 1.0]).unwrap();
                if i % 10 == 0 {
                    net.reset_stats();
                }
            }
            done.store(true, Ordering::SeqCst);
        });

        let mut output = OutputSlot::new();
        while !done.load(Ordering::SeqCst) {
            match op.run(&mut output) {
                Ok(()) => assert_eq!(output.len(), 1),
                Err(e) => assert_eq!(e.kind, ErrorKind::UnavailableStats),
            }
        }
    });
}

#[test]
fn test_registry_churn_yields_found_or_not_found() {
    let ws = Arc::new(Workspace::new());
    ws.create_net(def("eval_net"), ProfilingOptions::default());
    let op = GetProfDagStatsOp::new(ProfStatsConfig::partial("train"), ws.clone()).unwrap();
    let done = AtomicBool::new(false);

    thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..200 {
                ws.create_net(def("train_net"), ProfilingOptions::default());
                ws.remove_net("train_net");
            }
            done.store(true, Ordering::SeqCst);
        });

        let mut output = OutputSlot::new();
        while !done.load(Ordering::SeqCst) {
            if let Err(e) = op.run(&mut output) {
                assert_eq!(e.kind, ErrorKind::NotFound);
            }
        }
    });
}

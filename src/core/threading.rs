/*!
Thread placement for algorithms with large native stacks.

Handles share nothing, so independent handles may run on independent
threads. Some provider families use more stack than a worker thread gets by
default on some platforms; names matching the exclusion patterns are run on
the caller's thread instead.
*/

use std::thread;

/// Whether `name` matches one of `patterns` and must stay on the caller's thread
pub fn requires_caller_thread<S: AsRef<str>>(name: &str, patterns: &[S]) -> bool {
    patterns.iter().any(|pattern| name.contains(pattern.as_ref()))
}

/// Run `f` once per name and collect `(name, result)` in input order.
///
/// Names matching `patterns` run first, inline; the rest run concurrently on
/// scoped worker threads.
pub fn run_partitioned<S, T, F>(names: &[String], patterns: &[S], f: F) -> Vec<(String, T)>
where
    S: AsRef<str>,
    T: Send,
    F: Fn(&str) -> T + Sync,
{
    let mut results: Vec<Option<T>> = names.iter().map(|_| None).collect();

    for (slot, name) in results.iter_mut().zip(names) {
        if requires_caller_thread(name, patterns) {
            log::debug!("running {} on the caller's thread", name);
            *slot = Some(f(name.as_str()));
        }
    }

    thread::scope(|scope| {
        let f = &f;
        let handles: Vec<_> = results
            .iter_mut()
            .zip(names)
            .filter(|(slot, _)| slot.is_none())
            .map(|(slot, name)| scope.spawn(move || *slot = Some(f(name.as_str()))))
            .collect();
        for handle in handles {
            if let Err(panic) = handle.join() {
                std::panic::resume_unwind(panic);
            }
        }
    });

    names
        .iter()
        .cloned()
        .zip(results.into_iter().flatten())
        .collect()
}

//! Interactive driver: submits a handful of sleepy tasks, then waits for a
//! 'q' keystroke (or end of input) before shutting the pool down gracefully.

use std::io::Read;
use std::time::Duration;
use stoker::prelude::*;

fn main() -> Result<()> {
    let config = Config::builder().num_threads(6).build()?;
    let mut pool = WorkerPool::new(&config)?;

    for secs in [3u64, 1, 5, 2, 4] {
        pool.execute(move || {
            std::thread::sleep(Duration::from_secs(secs));
            println!("slept for {secs}s");
        })?;
    }

    println!("press 'q' (or close stdin) to shut down");
    for byte in std::io::stdin().bytes() {
        match byte {
            Ok(b'q') | Err(_) => break,
            Ok(_) => {}
        }
    }

    pool.shutdown(false);
    Ok(())
}

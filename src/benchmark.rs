pub use std::time::{Duration, Instant};

//  A value paired with the time it took to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benchmark<T> {
    pub content: T,
    pub elapsed: Duration,
}

impl<T> Benchmark<T> {
    //  Run `f` between two monotonic clock readings
    #[inline]
    pub fn measure<F: FnOnce() -> T>(f: F) -> Self {
        let start = Instant::now();
        let content = f();
        let elapsed = start.elapsed();
        Benchmark { content, elapsed }
    }
}

impl<T, E> Benchmark<Result<T, E>> {
    //  Lift the error out, dropping the elapsed time of a failed call
    pub fn transpose(self) -> Result<Benchmark<T>, E> {
        let elapsed = self.elapsed;
        self.content.map(|content| Benchmark { content, elapsed })
    }
}

//  Coarse wall-to-wall timer around a whole loop
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch(Instant);

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch(Instant::now())
    }
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Number of physical CPU cores, used as the default worker count when
/// several files are processed at once.
///
/// Falls back to the logical count reported by the OS, and never returns 0.
pub fn count_cores() -> usize {
    match num_cpus::get_physical() {
        0 => std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1),
        n => n,
    }
}

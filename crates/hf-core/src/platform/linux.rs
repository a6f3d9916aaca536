//! Linux counters from `sysinfo(2)`.

/// System memory counters normalized to KiB.
#[derive(Debug, Clone, Copy)]
pub struct MemoryCounters {
    pub total_kib: u64,
    pub free_kib: u64,
    pub buffers_kib: u64,
}

/// Seconds since boot.
pub fn uptime_seconds() -> Option<u64> {
    let mut info: libc::sysinfo = unsafe { std::mem::zeroed() };
    if unsafe { libc::sysinfo(&mut info) } != 0 {
        return None;
    }
    Some(info.uptime.max(0) as u64)
}

/// Total, free, and buffer memory. `mem_unit` is applied so the counters are
/// correct on systems where the kernel reports in larger units.
pub fn memory_counters() -> Option<MemoryCounters> {
    let mut info: libc::sysinfo = unsafe { std::mem::zeroed() };
    if unsafe { libc::sysinfo(&mut info) } != 0 {
        return None;
    }
    let unit = if info.mem_unit == 0 {
        1
    } else {
        u64::from(info.mem_unit)
    };
    Some(MemoryCounters {
        total_kib: info.totalram as u64 * unit / 1024,
        free_kib: info.freeram as u64 * unit / 1024,
        buffers_kib: info.bufferram as u64 * unit / 1024,
    })
}

//! Fact collection. One function per panel entry; every probe degrades to
//! a sentinel value instead of returning an error.

use std::env;
use std::fs;
use std::path::Path;

use crate::probe;

/// Everything the info panel displays, already formatted for display.
#[derive(Debug, Clone)]
pub struct SystemReport {
    pub username: String,
    pub hostname: String,
    pub os: String,
    pub kernel: String,
    pub uptime: String,
    pub packages: String,
    pub shell: String,
    pub cpu: String,
    pub gpu: String,
    pub memory: String,
    pub disk: String,
    pub cpu_usage: String,
    pub cpu_temp: String,
    pub load_average: String,
    pub desktop: String,
    pub resolution: String,
    pub locale: String,
    pub network: String,
    /// `None` when no battery is present.
    pub battery: Option<String>,
}

impl SystemReport {
    /// Probe the machine once, front to back.
    pub fn collect() -> Self {
        Self {
            username: username(),
            hostname: hostname(),
            os: os_name(),
            kernel: kernel_version(),
            uptime: uptime(),
            packages: package_count(),
            shell: shell_name(),
            cpu: cpu_model(),
            gpu: gpu_model(),
            memory: memory_usage(),
            disk: disk_usage(),
            cpu_usage: cpu_usage(),
            cpu_temp: cpu_temp(),
            load_average: load_average(),
            desktop: desktop_environment(),
            resolution: resolution(),
            locale: locale(),
            network: network_info(),
            battery: battery_status(),
        }
    }
}

fn env_nonempty(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

fn username() -> String {
    env_nonempty("LOGNAME")
        .or_else(|| env_nonempty("USER"))
        .or_else(|| probe::run_command("id", &["-un"]))
        .unwrap_or_else(|| "unknown".to_string())
}

fn hostname() -> String {
    probe::read_trimmed("/proc/sys/kernel/hostname")
        .filter(|name| !name.is_empty())
        .or_else(|| probe::run_command("uname", &["-n"]))
        .unwrap_or_else(|| "unknown".to_string())
}

fn os_name() -> String {
    probe::read_trimmed("/etc/os-release")
        .and_then(|contents| parse_os_release(&contents))
        .unwrap_or_else(|| "Unknown Linux".to_string())
}

fn parse_os_release(contents: &str) -> Option<String> {
    contents.lines().find_map(|line| {
        line.strip_prefix("PRETTY_NAME=")
            .map(|value| value.trim_matches('"').to_string())
    })
}

fn kernel_version() -> String {
    probe::run_command("uname", &["-r"])
        .filter(|release| !release.is_empty())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn uptime() -> String {
    probe::read_trimmed("/proc/uptime")
        .and_then(|contents| parse_uptime_seconds(&contents))
        .map(format_uptime)
        .unwrap_or_else(|| "Unknown".to_string())
}

fn parse_uptime_seconds(contents: &str) -> Option<u64> {
    let seconds: f64 = contents.split_whitespace().next()?.parse().ok()?;
    Some(seconds as u64)
}

fn format_uptime(total_seconds: u64) -> String {
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    if days > 0 {
        format!("up {days} days, {hours} hours, {minutes} minutes")
    } else if hours > 0 {
        format!("up {hours} hours, {minutes} minutes")
    } else {
        format!("up {minutes} minutes")
    }
}

/// First present package database wins: dpkg, then rpm, then pacman.
fn package_count() -> String {
    let dpkg_status = Path::new("/var/lib/dpkg/status");
    if dpkg_status.exists() {
        if let Some(status) = probe::read_trimmed(dpkg_status) {
            return count_dpkg_entries(&status).to_string();
        }
    }
    let rpm_db = Path::new("/var/lib/rpm");
    if rpm_db.exists() {
        return count_rpm_files(rpm_db).to_string();
    }
    let pacman_local = Path::new("/var/lib/pacman/local");
    if pacman_local.exists() {
        return count_subdirectories(pacman_local).to_string();
    }
    "0".to_string()
}

fn count_dpkg_entries(status: &str) -> usize {
    status
        .lines()
        .filter(|line| line.starts_with("Package:"))
        .count()
}

fn count_rpm_files(dir: &Path) -> usize {
    let Ok(entries) = fs::read_dir(dir) else {
        return 0;
    };
    let mut count = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            count += count_rpm_files(&path);
        } else if path.extension().is_some_and(|ext| ext == "rpm") {
            count += 1;
        }
    }
    count
}

fn count_subdirectories(dir: &Path) -> usize {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .count()
        })
        .unwrap_or(0)
}

fn shell_name() -> String {
    match env_nonempty("SHELL") {
        Some(shell) => shell.rsplit('/').next().unwrap_or(&shell).to_string(),
        None => "Unknown".to_string(),
    }
}

fn cpu_model() -> String {
    probe::read_trimmed("/proc/cpuinfo")
        .and_then(|contents| parse_cpu_model(&contents))
        .unwrap_or_else(|| "Unknown CPU".to_string())
}

fn parse_cpu_model(cpuinfo: &str) -> Option<String> {
    let raw = cpuinfo
        .lines()
        .find(|line| line.starts_with("model name"))?
        .split(':')
        .nth(1)?
        .trim();
    let stripped = raw.replace("(R)", "").replace("(TM)", "");
    let stripped = match stripped.find("CPU @") {
        Some(at) => &stripped[..at],
        None => stripped.as_str(),
    };
    let model = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    (!model.is_empty()).then_some(model)
}

fn gpu_model() -> String {
    // `/proc/devices` present means device enumeration is up.
    if !Path::new("/proc/devices").exists() {
        return "Unknown GPU".to_string();
    }
    probe::run_command("lspci", &[])
        .and_then(|output| parse_gpu_model(&output))
        .unwrap_or_else(|| "Unknown GPU".to_string())
}

fn parse_gpu_model(lspci: &str) -> Option<String> {
    let line = lspci.lines().find(|line| {
        let lower = line.to_lowercase();
        lower.contains("vga") || lower.contains("3d") || lower.contains("2d")
    })?;
    let description = line.splitn(3, ':').nth(2)?.trim();
    (!description.is_empty()).then(|| description.to_string())
}

fn memory_usage() -> String {
    probe::read_trimmed("/proc/meminfo")
        .and_then(|contents| parse_memory(&contents))
        .unwrap_or_else(|| "Unknown".to_string())
}

fn parse_memory(meminfo: &str) -> Option<String> {
    let mut total_kb = 0u64;
    let mut available_kb = 0u64;
    for line in meminfo.lines() {
        if let Some(rest) = line.strip_prefix("MemTotal:") {
            total_kb = rest.split_whitespace().next()?.parse().ok()?;
        } else if let Some(rest) = line.strip_prefix("MemAvailable:") {
            available_kb = rest.split_whitespace().next()?.parse().ok()?;
        }
    }
    if total_kb == 0 || available_kb == 0 || available_kb > total_kb {
        return None;
    }
    let used_kb = total_kb - available_kb;
    let percentage = used_kb * 100 / total_kb;
    Some(format!(
        "{}GB / {}GB ({percentage}%)",
        used_kb / 1024 / 1024,
        total_kb / 1024 / 1024
    ))
}

fn disk_usage() -> String {
    probe::run_command("df", &["-h", "/"])
        .and_then(|output| parse_disk(&output))
        .unwrap_or_else(|| "Unknown".to_string())
}

fn parse_disk(df: &str) -> Option<String> {
    let fields: Vec<&str> = df.lines().nth(1)?.split_whitespace().collect();
    if fields.len() < 5 {
        return None;
    }
    Some(format!("{} / {} ({})", fields[2], fields[1], fields[4]))
}

fn cpu_usage() -> String {
    probe::read_trimmed("/proc/stat")
        .and_then(|contents| parse_cpu_usage(&contents))
        .map(|usage| usage.to_string())
        .unwrap_or_else(|| "0".to_string())
}

fn parse_cpu_usage(stat: &str) -> Option<u64> {
    let line = stat.lines().find(|line| line.starts_with("cpu "))?;
    let values: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map_while(|field| field.parse().ok())
        .collect();
    let idle = *values.get(3)?;
    let total: u64 = values.iter().sum();
    if total == 0 {
        return None;
    }
    Some(100 - idle * 100 / total)
}

fn cpu_temp() -> String {
    probe::read_trimmed("/sys/class/thermal/thermal_zone0/temp")
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|&millidegrees| millidegrees > 0)
        .map(|millidegrees| format!("{}°C", millidegrees / 1000))
        .unwrap_or_else(|| "N/A".to_string())
}

fn load_average() -> String {
    probe::read_trimmed("/proc/loadavg")
        .and_then(|contents| parse_load_average(&contents))
        .unwrap_or_else(|| "Unknown".to_string())
}

fn parse_load_average(loadavg: &str) -> Option<String> {
    let fields: Vec<&str> = loadavg.split_whitespace().take(3).collect();
    (fields.len() == 3).then(|| fields.join(" "))
}

fn desktop_environment() -> String {
    env_nonempty("XDG_CURRENT_DESKTOP")
        .or_else(|| env_nonempty("DESKTOP_SESSION"))
        .or_else(|| env_nonempty("GDMSESSION"))
        .unwrap_or_else(|| "Unknown".to_string())
}

fn resolution() -> String {
    // xrandr needs a display to talk to.
    if env::var_os("DISPLAY").is_none() {
        return "Unknown".to_string();
    }
    probe::run_command("xrandr", &[])
        .and_then(|output| parse_active_mode(&output))
        .unwrap_or_else(|| "Unknown".to_string())
}

fn parse_active_mode(xrandr: &str) -> Option<String> {
    xrandr
        .lines()
        .find(|line| line.contains('*'))?
        .split_whitespace()
        .next()
        .map(str::to_string)
}

fn locale() -> String {
    env_nonempty("LANG").unwrap_or_else(|| "Unknown".to_string())
}

fn network_info() -> String {
    let Some(route_table) = probe::read_trimmed("/proc/net/route") else {
        return "No connection".to_string();
    };
    let Some(interface) = default_route_interface(&route_table) else {
        return "No connection".to_string();
    };
    let address = probe::run_command("ip", &["addr", "show", &interface])
        .and_then(|output| parse_inet_address(&output))
        .unwrap_or_else(|| "Unknown IP".to_string());
    format!("{interface} ({address})")
}

fn default_route_interface(route_table: &str) -> Option<String> {
    route_table.lines().find_map(|line| {
        let mut fields = line.split_whitespace();
        let interface = fields.next()?;
        let destination = fields.next()?;
        (destination == "00000000").then(|| interface.to_string())
    })
}

fn parse_inet_address(ip_output: &str) -> Option<String> {
    ip_output.lines().find_map(|line| {
        line.trim_start()
            .strip_prefix("inet ")?
            .split_whitespace()
            .next()?
            .split('/')
            .next()
            .map(str::to_string)
    })
}

fn battery_status() -> Option<String> {
    let capacity = probe::read_trimmed("/sys/class/power_supply/BAT0/capacity")
        .filter(|capacity| !capacity.is_empty())?;
    let status =
        probe::read_trimmed("/sys/class/power_supply/BAT0/status").unwrap_or_default();
    Some(format!("{capacity}% [{status}]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_release_pretty_name_wins() {
        let contents = "NAME=\"Ubuntu\"\nPRETTY_NAME=\"Ubuntu 24.04.1 LTS\"\nVERSION_ID=\"24.04\"";
        assert_eq!(
            parse_os_release(contents),
            Some("Ubuntu 24.04.1 LTS".to_string())
        );
    }

    #[test]
    fn os_release_without_pretty_name_is_none() {
        assert_eq!(parse_os_release("NAME=\"Ubuntu\"\nVERSION_ID=\"24.04\""), None);
    }

    #[test]
    fn uptime_shows_days_hours_minutes() {
        assert_eq!(format_uptime(93_784), "up 1 days, 2 hours, 3 minutes");
    }

    #[test]
    fn uptime_drops_leading_zero_units() {
        assert_eq!(format_uptime(7_384), "up 2 hours, 3 minutes");
        assert_eq!(format_uptime(184), "up 3 minutes");
    }

    #[test]
    fn uptime_seconds_come_from_the_first_field() {
        assert_eq!(parse_uptime_seconds("93784.53 180421.49"), Some(93_784));
        assert_eq!(parse_uptime_seconds(""), None);
    }

    #[test]
    fn cpu_model_strips_trademarks_and_clock() {
        let cpuinfo = "processor\t: 0\nmodel name\t: Intel(R) Core(TM) i7-8550U CPU @ 1.80GHz\n";
        assert_eq!(
            parse_cpu_model(cpuinfo),
            Some("Intel Core i7-8550U".to_string())
        );
    }

    #[test]
    fn cpu_model_without_model_name_is_none() {
        assert_eq!(parse_cpu_model("processor\t: 0\nflags\t: fpu vme\n"), None);
    }

    #[test]
    fn cpu_usage_is_busy_share_of_total() {
        let stat = "cpu  4705 150 1120 16250 520 0 175 0 0 0\ncpu0 2352 75 560 8125 260 0 87 0 0 0\n";
        assert_eq!(parse_cpu_usage(stat), Some(30));
    }

    #[test]
    fn memory_summary_in_gigabytes() {
        let meminfo = "MemTotal:       16384256 kB\nMemFree:         2097152 kB\nMemAvailable:    8192128 kB\n";
        assert_eq!(parse_memory(meminfo), Some("7GB / 15GB (50%)".to_string()));
    }

    #[test]
    fn memory_needs_both_total_and_available() {
        assert_eq!(parse_memory("MemTotal:       16384256 kB\n"), None);
    }

    #[test]
    fn df_row_becomes_disk_summary() {
        let df = "Filesystem      Size  Used Avail Use% Mounted on\n/dev/nvme0n1p2  468G  213G  232G  48% /\n";
        assert_eq!(parse_disk(df), Some("213G / 468G (48%)".to_string()));
    }

    #[test]
    fn gpu_line_keeps_text_after_the_second_colon() {
        let lspci = "00:01.0 PCI bridge: Intel Corporation Device 1901\n00:02.0 VGA compatible controller: Intel Corporation UHD Graphics 620 (rev 07)\n";
        assert_eq!(
            parse_gpu_model(lspci),
            Some("Intel Corporation UHD Graphics 620 (rev 07)".to_string())
        );
    }

    #[test]
    fn default_route_checks_the_destination_column() {
        let route = "Iface\tDestination\tGateway\nwlan0\t00000000\t0102A8C0\nwlan0\t0002A8C0\t00000000\n";
        assert_eq!(default_route_interface(route), Some("wlan0".to_string()));
    }

    #[test]
    fn route_without_default_entry_is_none() {
        let route = "Iface\tDestination\tGateway\neth0\t0002A8C0\t00000000\n";
        assert_eq!(default_route_interface(route), None);
    }

    #[test]
    fn inet_line_yields_bare_address() {
        let ip = "2: wlan0: <BROADCAST,MULTICAST,UP>\n    inet6 fe80::1/64 scope link\n    inet 192.168.1.10/24 brd 192.168.1.255 scope global\n";
        assert_eq!(parse_inet_address(ip), Some("192.168.1.10".to_string()));
    }

    #[test]
    fn active_mode_is_the_first_starred_line() {
        let xrandr = "Screen 0: minimum 320 x 200\neDP-1 connected primary 1920x1080+0+0\n   1920x1080     60.01*+  59.97\n   1680x1050     59.95\n";
        assert_eq!(parse_active_mode(xrandr), Some("1920x1080".to_string()));
    }

    #[test]
    fn load_average_takes_three_fields() {
        assert_eq!(
            parse_load_average("0.52 0.58 0.59 1/1234 5678"),
            Some("0.52 0.58 0.59".to_string())
        );
        assert_eq!(parse_load_average("0.52 0.58"), None);
    }

    #[test]
    fn dpkg_status_counts_package_stanzas() {
        let status = "Package: bash\nStatus: install ok installed\n\nPackage: coreutils\nStatus: install ok installed\n";
        assert_eq!(count_dpkg_entries(status), 2);
    }
}

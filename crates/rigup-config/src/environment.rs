//! Environment provider and dev-server host discovery.
//!
//! All ambient reads (process environment, live network interfaces) go
//! through the [`Environment`] trait so descriptor construction stays
//! deterministic under test. [`SystemEnvironment`] is the live
//! implementation; [`StaticEnvironment`] is a fixed substitute for tests and
//! embedded use.

use std::collections::HashMap;
use std::net::IpAddr;

use tracing::debug;

/// A network interface as reported by the host OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetInterface {
    pub name: String,
    pub addr: IpAddr,
}

impl NetInterface {
    pub fn new(name: impl Into<String>, addr: IpAddr) -> Self {
        Self {
            name: name.into(),
            addr,
        }
    }
}

/// Source of ambient state consulted during descriptor construction.
pub trait Environment {
    /// Look up an environment variable. Empty values count as unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Enumerate network interfaces. An empty list is a valid answer.
    fn interfaces(&self) -> Vec<NetInterface>;
}

/// Live process environment and OS network state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|v| !v.is_empty())
    }

    fn interfaces(&self) -> Vec<NetInterface> {
        match local_ip_address::list_afinet_netifas() {
            Ok(list) => list
                .into_iter()
                .map(|(name, addr)| NetInterface { name, addr })
                .collect(),
            Err(err) => {
                debug!("network interface enumeration failed: {err}");
                Vec::new()
            }
        }
    }
}

/// Fixed environment for deterministic descriptor construction.
///
/// # Example
///
/// ```
/// use rigup_config::{discover_host, HostAddress, StaticEnvironment};
///
/// let env = StaticEnvironment::default();
/// assert_eq!(discover_host(&env), HostAddress::Loopback);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
    interfaces: Vec<NetInterface>,
}

impl StaticEnvironment {
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_interface(mut self, name: impl Into<String>, addr: IpAddr) -> Self {
        self.interfaces.push(NetInterface::new(name, addr));
        self
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned().filter(|v| !v.is_empty())
    }

    fn interfaces(&self) -> Vec<NetInterface> {
        self.interfaces.clone()
    }
}

/// Address the dev server binds to: a discovered wireless interface, or the
/// loopback placeholder when none is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAddress {
    Interface(IpAddr),
    Loopback,
}

impl HostAddress {
    /// Render as the host string placed in the dev-server spec.
    pub fn as_host(&self) -> String {
        match self {
            HostAddress::Interface(addr) => addr.to_string(),
            HostAddress::Loopback => "localhost".to_string(),
        }
    }
}

// Interface name prefixes treated as wireless adapters. "wl" covers the
// Linux wlan0/wlp3s0/wlx... families and the Windows "WLAN" adapter name
// once lowercased.
const WIRELESS_PREFIXES: &[&str] = &["wl", "wifi", "wireless"];

/// Find the dev-server host: the first wireless interface carrying a
/// non-loopback IPv4 address.
///
/// Best-effort by contract. Absent, empty, or malformed interface lists
/// yield [`HostAddress::Loopback`]; this never fails.
pub fn discover_host(env: &dyn Environment) -> HostAddress {
    for iface in env.interfaces() {
        let name = iface.name.to_ascii_lowercase();
        if !WIRELESS_PREFIXES.iter().any(|p| name.starts_with(p)) {
            continue;
        }
        if iface.addr.is_ipv4() && !iface.addr.is_loopback() {
            debug!(interface = %iface.name, address = %iface.addr, "discovered dev server host");
            return HostAddress::Interface(iface.addr);
        }
    }
    debug!("no usable wireless interface, using loopback");
    HostAddress::Loopback
}

use crate::DomainError;
use ipnetwork::IpNetwork;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::Path;

const BUILTIN_RANGES: &str = include_str!("../data/china_ip_ranges.txt");

/// Mainland-China address space as sorted, non-overlapping inclusive ranges.
///
/// Built once at startup and shared read-only; lookups are a binary search
/// over each family's range list.
#[derive(Debug, Clone, Default)]
pub struct ChinaIpRanges {
    v4: Vec<(u32, u32)>,
    v6: Vec<(u128, u128)>,
}

impl ChinaIpRanges {
    /// Table compiled into the binary.
    pub fn builtin() -> Self {
        let networks = cidr_lines(BUILTIN_RANGES).filter_map(|line| line.parse::<IpNetwork>().ok());
        Self::from_networks(networks)
    }

    /// Parse a CIDR list: one network per line, `#` starts a comment.
    pub fn from_cidr_list(text: &str) -> Result<Self, DomainError> {
        let mut networks = Vec::new();
        for line in cidr_lines(text) {
            let network: IpNetwork = line
                .parse()
                .map_err(|e| DomainError::InvalidIpRange(format!("{}: {}", line, e)))?;
            networks.push(network);
        }
        Ok(Self::from_networks(networks))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_cidr_list(&text)
    }

    pub fn from_networks(networks: impl IntoIterator<Item = IpNetwork>) -> Self {
        let mut v4 = Vec::new();
        let mut v6 = Vec::new();

        for network in networks {
            match network {
                IpNetwork::V4(net) => {
                    let mask = u32::from(net.mask());
                    let start = u32::from(net.network());
                    v4.push((start, start | !mask));
                }
                IpNetwork::V6(net) => {
                    let mask = u128::from(net.mask());
                    let start = u128::from(net.network());
                    v6.push((start, start | !mask));
                }
            }
        }

        Self {
            v4: merge(v4, next_v4),
            v6: merge(v6, next_v6),
        }
    }

    /// True when `ip` falls inside a mainland-China range. IPv4-mapped
    /// IPv6 addresses are checked against the IPv4 table.
    pub fn is_domestic(&self, ip: IpAddr) -> bool {
        match ip {
            IpAddr::V4(v4) => contains(&self.v4, u32::from(v4)),
            IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
                Some(v4) => contains(&self.v4, u32::from(v4)),
                None => contains(&self.v6, u128::from(v6)),
            },
        }
    }

    /// Number of merged ranges across both families.
    pub fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v4.is_empty() && self.v6.is_empty()
    }

    /// First and last address of every merged range.
    pub fn ranges(&self) -> impl Iterator<Item = (IpAddr, IpAddr)> + '_ {
        let v4 = self
            .v4
            .iter()
            .map(|&(s, e)| (IpAddr::V4(Ipv4Addr::from(s)), IpAddr::V4(Ipv4Addr::from(e))));
        let v6 = self
            .v6
            .iter()
            .map(|&(s, e)| (IpAddr::V6(Ipv6Addr::from(s)), IpAddr::V6(Ipv6Addr::from(e))));
        v4.chain(v6)
    }
}

fn cidr_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
}

fn merge<T: Copy + Ord>(mut ranges: Vec<(T, T)>, successor: fn(T) -> T) -> Vec<(T, T)> {
    ranges.sort_unstable();
    let mut merged: Vec<(T, T)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= successor(last.1) => {
                if end > last.1 {
                    last.1 = end;
                }
            }
            _ => merged.push((start, end)),
        }
    }
    merged
}

fn next_v4(value: u32) -> u32 {
    value.saturating_add(1)
}

fn next_v6(value: u128) -> u128 {
    value.saturating_add(1)
}

fn contains<T: Copy + Ord>(ranges: &[(T, T)], value: T) -> bool {
    let idx = ranges.partition_point(|&(start, _)| start <= value);
    idx > 0 && ranges[idx - 1].1 >= value
}

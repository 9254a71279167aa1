use freedns_domain::ChinaIpRanges;
use std::net::IpAddr;

pub trait AddressClassifier: Send + Sync {
    fn is_domestic(&self, ip: IpAddr) -> bool;
}

impl AddressClassifier for ChinaIpRanges {
    fn is_domestic(&self, ip: IpAddr) -> bool {
        ChinaIpRanges::is_domestic(self, ip)
    }
}

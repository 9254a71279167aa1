pub mod dns_class;
pub mod record;
pub mod record_type;

pub use dns_class::DnsClass;
pub use record::DnsRecord;
pub use record_type::RecordType;

//! Join between institution records and the services dataset.

use hcd_model::ServiceRecord;

/// Service records in file order.
#[derive(Debug, Clone, Default)]
pub struct ServiceDirectory {
    services: Vec<ServiceRecord>,
}

impl ServiceDirectory {
    pub fn new(services: Vec<ServiceRecord>) -> Self {
        Self { services }
    }

    /// First service record whose institution name contains `name`.
    pub fn find(&self, name: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|service| service.covers(name))
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcd_model::ServiceFlag;

    fn service(name: &str, flag: &str) -> ServiceRecord {
        ServiceRecord {
            institution_name: name.to_string(),
            metadata: Vec::new(),
            flags: vec![ServiceFlag::from_cell("居家醫療", flag)],
        }
    }

    #[test]
    fn first_containing_record_wins() {
        let directory = ServiceDirectory::new(vec![
            service("臺北市立聯合醫院仁愛院區", "1"),
            service("臺北市立聯合醫院", "0"),
        ]);
        let found = directory.find("臺北市立聯合醫院").map(|s| s.flags[0].provided);
        assert_eq!(found, Some(true));
        assert!(directory.find("健康診所").is_none());
        assert!(directory.find("").is_none());
        assert_eq!(directory.len(), 2);
    }
}

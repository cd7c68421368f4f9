pub struct RegionCode {}

#[allow(unused)]
impl RegionCode {
    pub fn at() -> &'static str {
        "AT"
    }

    pub fn ca() -> &'static str {
        "CA"
    }

    pub fn ch() -> &'static str {
        "CH"
    }

    pub fn de() -> &'static str {
        "DE"
    }

    pub fn fr() -> &'static str {
        "FR"
    }

    pub fn gb() -> &'static str {
        "GB"
    }

    pub fn us() -> &'static str {
        "US"
    }

    /// Not in the directory.
    pub fn zz() -> &'static str {
        "ZZ"
    }
}

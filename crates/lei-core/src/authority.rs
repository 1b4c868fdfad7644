//! # Registration Authority Registry
//!
//! A compiled-in, sorted table of the registration authority codes
//! published in the GLEIF Registration Authorities List. Codes have the
//! form `RA` followed by six digits.
//!
//! ## Membership
//!
//! The table is authoritative. A code is known only if it is listed; there
//! is no numeric range check, so `RA100001` is unknown even though it has
//! the right shape. Two codes are placeholders rather than real authorities:
//!
//! - `RA888888`: the authority is not yet in the list.
//! - `RA999999`: no registration authority applies to the entity.
//!
//! Classification operates on standalone RA codes. It is never applied to
//! the prefix of an LEI.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LeiError;

/// Display form of a code that is not in the table.
pub const UNKNOWN: &str = "UNKNOWN";

/// Placeholder for an authority that is not yet listed.
pub const RA_NOT_LISTED: &str = "RA888888";

/// Placeholder for entities to which no registration authority applies.
pub const RA_NOT_APPLICABLE: &str = "RA999999";

/// Known registration authority codes. Must stay sorted ascending; lookups
/// binary-search this slice.
static REGISTRATION_AUTHORITIES: &[&str] = &[
    "RA000001", "RA000002", "RA000003", "RA000004", "RA000005", "RA000006", "RA000007", "RA000008",
    "RA000009", "RA000010", "RA000011", "RA000012", "RA000013", "RA000014", "RA000015", "RA000016",
    "RA000017", "RA000018", "RA000019", "RA000020", "RA000021", "RA000022", "RA000023", "RA000024",
    "RA000025", "RA000026", "RA000027", "RA000028", "RA000029", "RA000030", "RA000031", "RA000032",
    "RA000033", "RA000034", "RA000035", "RA000036", "RA000037", "RA000038", "RA000039", "RA000040",
    "RA000041", "RA000042", "RA000043", "RA000044", "RA000045", "RA000046", "RA000047", "RA000048",
    "RA000049", "RA000050", "RA000051", "RA000052", "RA000053", "RA000054", "RA000055", "RA000056",
    "RA000057", "RA000058", "RA000059", "RA000060", "RA000061", "RA000062", "RA000063", "RA000064",
    "RA000065", "RA000066", "RA000067", "RA000068", "RA000069", "RA000070", "RA000071", "RA000072",
    "RA000073", "RA000074", "RA000075", "RA000076", "RA000077", "RA000078", "RA000079", "RA000080",
    "RA000081", "RA000082", "RA000083", "RA000084", "RA000085", "RA000086", "RA000087", "RA000088",
    "RA000089", "RA000090", "RA000091", "RA000092", "RA000093", "RA000094", "RA000095", "RA000096",
    "RA000097", "RA000098", "RA000099", "RA000100", "RA000101", "RA000102", "RA000103", "RA000104",
    "RA000105", "RA000106", "RA000107", "RA000108", "RA000109", "RA000110", "RA000111", "RA000112",
    "RA000113", "RA000114", "RA000115", "RA000116", "RA000117", "RA000118", "RA000119", "RA000120",
    "RA000121", "RA000122", "RA000123", "RA000124", "RA000125", "RA000126", "RA000127", "RA000128",
    "RA000129", "RA000130", "RA000131", "RA000132", "RA000133", "RA000134", "RA000135", "RA000136",
    "RA000137", "RA000138", "RA000139", "RA000140", "RA000141", "RA000142", "RA000143", "RA000144",
    "RA000145", "RA000146", "RA000147", "RA000148", "RA000149", "RA000150", "RA000151", "RA000152",
    "RA000153", "RA000154", "RA000155", "RA000156", "RA000157", "RA000158", "RA000159", "RA000160",
    "RA000161", "RA000162", "RA000163", "RA000164", "RA000165", "RA000166", "RA000167", "RA000168",
    "RA000169", "RA000170", "RA000171", "RA000172", "RA000173", "RA000174", "RA000175", "RA000176",
    "RA000177", "RA000178", "RA000179", "RA000180", "RA000181", "RA000182", "RA000183", "RA000184",
    "RA000185", "RA000186", "RA000187", "RA000188", "RA000189", "RA000190", "RA000191", "RA000192",
    "RA000193", "RA000194", "RA000195", "RA000196", "RA000197", "RA000198", "RA000199", "RA000200",
    "RA000201", "RA000202", "RA000203", "RA000204", "RA000205", "RA000206", "RA000207", "RA000208",
    "RA000209", "RA000210", "RA000211", "RA000212", "RA000213", "RA000214", "RA000215", "RA000216",
    "RA000217", "RA000218", "RA000219", "RA000220", "RA000221", "RA000222", "RA000223", "RA000224",
    "RA000225", "RA000226", "RA000227", "RA000228", "RA000229", "RA000230", "RA000231", "RA000232",
    "RA000233", "RA000234", "RA000235", "RA000236", "RA000237", "RA000238", "RA000239", "RA000240",
    "RA000241", "RA000242", "RA000243", "RA000244", "RA000245", "RA000246", "RA000247", "RA000248",
    "RA000249", "RA000250", "RA000251", "RA000252", "RA000253", "RA000254", "RA000255", "RA000256",
    "RA000257", "RA000258", "RA000259", "RA000260", "RA000261", "RA000262", "RA000263", "RA000264",
    "RA000265", "RA000266", "RA000267", "RA000268", "RA000269", "RA000270", "RA000271", "RA000272",
    "RA000273", "RA000274", "RA000275", "RA000276", "RA000277", "RA000278", "RA000279", "RA000280",
    "RA000281", "RA000282", "RA000283", "RA000284", "RA000285", "RA000286", "RA000287", "RA000288",
    "RA000289", "RA000290", "RA000291", "RA000292", "RA000293", "RA000294", "RA000295", "RA000296",
    "RA000297", "RA000298", "RA000299", "RA000300", "RA000301", "RA000302", "RA000303", "RA000304",
    "RA000305", "RA000306", "RA000307", "RA000308", "RA000309", "RA000310", "RA000311", "RA000312",
    "RA000313", "RA000314", "RA000315", "RA000316", "RA000317", "RA000318", "RA000319", "RA000320",
    "RA000321", "RA000322", "RA000323", "RA000324", "RA000325", "RA000326", "RA000327", "RA000328",
    "RA000329", "RA000330", "RA000331", "RA000332", "RA000333", "RA000334", "RA000335", "RA000336",
    "RA000337", "RA000338", "RA000339", "RA000340", "RA000341", "RA000342", "RA000343", "RA000344",
    "RA000345", "RA000346", "RA000347", "RA000348", "RA000349", "RA000350", "RA000351", "RA000352",
    "RA000353", "RA000354", "RA000355", "RA000356", "RA000357", "RA000358", "RA000359", "RA000360",
    "RA000361", "RA000362", "RA000363", "RA000364", "RA000365", "RA000366", "RA000367", "RA000368",
    "RA000369", "RA000370", "RA000371", "RA000372", "RA000373", "RA000374", "RA000375", "RA000376",
    "RA000377", "RA000378", "RA000379", "RA000380", "RA000381", "RA000382", "RA000383", "RA000384",
    "RA000385", "RA000386", "RA000387", "RA000388", "RA000389", "RA000390", "RA000391", "RA000392",
    "RA000393", "RA000394", "RA000395", "RA000396", "RA000397", "RA000398", "RA000399", "RA000400",
    "RA000401", "RA000402", "RA000403", "RA000404", "RA000405", "RA000406", "RA000407", "RA000408",
    "RA000409", "RA000410", "RA000411", "RA000412", "RA000413", "RA000414", "RA000415", "RA000416",
    "RA000417", "RA000418", "RA000419", "RA000420", "RA000421", "RA000422", "RA000423", "RA000424",
    "RA000425", "RA000426", "RA000427", "RA000428", "RA000429", "RA000430", "RA000431", "RA000432",
    "RA000433", "RA000434", "RA000435", "RA000436", "RA000437", "RA000438", "RA000439", "RA000440",
    "RA000441", "RA000442", "RA000443", "RA000444", "RA000445", "RA000446", "RA000447", "RA000448",
    "RA000449", "RA000450", "RA000451", "RA000452", "RA000453", "RA000454", "RA000455", "RA000456",
    "RA000457", "RA000458", "RA000459", "RA000460", "RA000461", "RA000462", "RA000463", "RA000464",
    "RA000465", "RA000466", "RA000467", "RA000468", "RA000469", "RA000470", "RA000471", "RA000472",
    "RA000473", "RA000474", "RA000475", "RA000476", "RA000477", "RA000478", "RA000479", "RA000480",
    "RA000481", "RA000482", "RA000483", "RA000484", "RA000485", "RA000486", "RA000487", "RA000488",
    "RA000489", "RA000490", "RA000491", "RA000492", "RA000493", "RA000494", "RA000495", "RA000496",
    "RA000497", "RA000498", "RA000499", "RA000500", "RA000501", "RA000502", "RA000503", "RA000504",
    "RA000505", "RA000506", "RA000507", "RA000508", "RA000509", "RA000510", "RA000511", "RA000512",
    "RA000513", "RA000514", "RA000515", "RA000516", "RA000517", "RA000518", "RA000519", "RA000520",
    "RA000521", "RA000522", "RA000523", "RA000524", "RA000525", "RA000526", "RA000527", "RA000528",
    "RA000529", "RA000530", "RA000531", "RA000532", "RA000533", "RA000534", "RA000535", "RA000536",
    "RA000537", "RA000538", "RA000539", "RA000540", "RA000541", "RA000542", "RA000543", "RA000544",
    "RA000545", "RA000546", "RA000547", "RA000548", "RA000549", "RA000550", "RA000551", "RA000552",
    "RA000553", "RA000554", "RA000555", "RA000556", "RA000557", "RA000558", "RA000559", "RA000560",
    "RA000561", "RA000562", "RA000563", "RA000564", "RA000565", "RA000566", "RA000567", "RA000568",
    "RA000569", "RA000570", "RA000571", "RA000572", "RA000573", "RA000574", "RA000575", "RA000576",
    "RA000577", "RA000578", "RA000579", "RA000580", "RA000581", "RA000582", "RA000583", "RA000584",
    "RA000585", "RA000586", "RA000587", "RA000588", "RA000589", "RA000590", "RA000591", "RA000592",
    "RA000593", "RA000594", "RA000595", "RA000596", "RA000597", "RA000598", "RA000599", "RA000600",
    "RA000601", "RA000602", "RA000603", "RA000604", "RA000605", "RA000606", "RA000607", "RA000608",
    "RA000609", "RA000610", "RA000611", "RA000612", "RA000613", "RA000614", "RA000615", "RA000616",
    "RA000617", "RA000618", "RA000619", "RA000620", "RA000621", "RA000622", "RA000623", "RA000624",
    "RA000625", "RA000626", "RA000627", "RA000628", "RA000629", "RA000630", "RA000631", "RA000632",
    "RA000633", "RA000634", "RA000635", "RA000636", "RA000637", "RA000638", "RA000639", "RA000640",
    "RA000641", "RA000642", "RA000643", "RA000644", "RA000645", "RA000646", "RA000647", "RA000648",
    "RA000649", "RA000650", "RA000651", "RA000652", "RA000653", "RA000654", "RA000655", "RA000656",
    "RA000657", "RA000658", "RA000659", "RA000660", "RA000661", "RA000662", "RA000663", "RA000664",
    "RA000665", "RA000666", "RA000667", "RA000668", "RA000669", "RA000670", "RA000671", "RA000672",
    "RA000673", "RA000674", "RA000675", "RA000676", "RA000677", "RA000678", "RA000679", "RA000680",
    "RA000681", "RA000682", "RA000683", "RA000684", "RA000685", "RA000686", "RA000687", "RA000688",
    "RA000689", "RA000690", "RA000691", "RA000692", "RA000693", "RA000694", "RA000695", "RA000696",
    "RA000697", "RA000698", "RA000699", "RA000700", "RA000701", "RA000702", "RA000703", "RA000704",
    "RA000705", "RA000706", "RA000707", "RA000708", "RA000709", "RA000710", "RA000711", "RA000712",
    "RA000713", "RA000714", "RA000715", "RA000716", "RA000717", "RA000718", "RA000719", "RA000720",
    "RA888888", "RA999999",
];

/// The full registration authority table in ascending order.
pub fn registration_authorities() -> &'static [&'static str] {
    REGISTRATION_AUTHORITIES
}

/// Find `code` in the table, returning the table's own static copy.
fn lookup(code: &str) -> Option<&'static str> {
    REGISTRATION_AUTHORITIES
        .binary_search_by(|probe| (*probe).cmp(code))
        .ok()
        .map(|idx| REGISTRATION_AUTHORITIES[idx])
}

/// A registration authority code, or the `UNKNOWN` sentinel.
///
/// Known values borrow from the static table, so the type is `Copy` and
/// never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RegistrationAuthority(Option<&'static str>);

impl RegistrationAuthority {
    /// The sentinel for codes not present in the table.
    pub const UNKNOWN: Self = Self(None);

    /// Look up a registration authority code.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`LeiError::UnknownRa`] carrying the input if the code is not
    /// listed.
    ///
    /// # Examples
    ///
    /// ```
    /// use lei_core::RegistrationAuthority;
    ///
    /// let ra = RegistrationAuthority::new("RA000001").unwrap();
    /// assert_eq!(ra.to_string(), "RA000001");
    /// assert!(RegistrationAuthority::new("RA100001").is_err());
    /// ```
    pub fn new(code: &str) -> Result<Self, LeiError> {
        lookup(code)
            .map(|known| Self(Some(known)))
            .ok_or_else(|| LeiError::UnknownRa(code.to_string()))
    }

    /// Classify a code, collapsing misses to [`RegistrationAuthority::UNKNOWN`].
    pub fn classify(code: &str) -> Self {
        Self(lookup(code))
    }

    /// Whether this value is a listed code.
    pub fn is_known(&self) -> bool {
        self.0.is_some()
    }

    /// Whether this value is one of the placeholder codes `RA888888` or
    /// `RA999999`.
    pub fn is_placeholder(&self) -> bool {
        matches!(self.0, Some(RA_NOT_LISTED) | Some(RA_NOT_APPLICABLE))
    }

    /// The code, or `"UNKNOWN"`.
    pub fn as_str(&self) -> &'static str {
        self.0.unwrap_or(UNKNOWN)
    }
}

impl std::fmt::Display for RegistrationAuthority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RegistrationAuthority {
    type Err = LeiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for RegistrationAuthority {
    type Error = LeiError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for RegistrationAuthority {
    type Error = LeiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl Serialize for RegistrationAuthority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Accepts a listed code or the literal `"UNKNOWN"` written by `Serialize`.
/// Any other unlisted code is rejected.
impl<'de> Deserialize<'de> for RegistrationAuthority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == UNKNOWN {
            return Ok(Self::UNKNOWN);
        }
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

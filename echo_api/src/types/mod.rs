mod meta;
pub use self::meta::ApiError;

mod facility;
pub use self::facility::Facility;

mod facilities;
pub use self::facilities::{FacilitiesResponse, FacilitiesResults};

mod map;
pub use self::map::{MapData, MapOutput, MapResponse};

mod qid;
pub use self::qid::QidResponse;

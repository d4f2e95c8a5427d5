pub mod confirm;
pub mod invite;
pub mod link;

/*
 Linking flow. The patient enters the caregiver's email; we issue a 6-digit
 code to that address (only its sha256 digest is stored) with a 15-minute
 expiry. The patient then types the code back in; confirmation re-validates
 everything and commits the 1:1 caregiver_link. Resending simply issues a new
 code and retires the old ones.
 */

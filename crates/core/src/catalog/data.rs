//! Built-in catalog records.
//!
//! Stable APIs come first, then APIs in their initial phase. Keep
//! `previous_versions` most recent first; `Catalog::validate` rejects
//! anything else.

use super::{ApiRecord, Category, InitialApi, StableApi};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn stable(
    name: &str,
    slug: &str,
    category: Category,
    description: &str,
    version: &str,
    previous_versions: &[&str],
    use_cases: &[&str],
    industries: &[&str],
    auth_flow: &str,
    http_methods: &[&str],
    key_endpoints: &[&str],
    repository: &str,
) -> ApiRecord {
    ApiRecord::Stable(StableApi {
        name: name.to_string(),
        slug: slug.to_string(),
        category,
        description: description.to_string(),
        version: version.to_string(),
        previous_versions: strings(previous_versions),
        use_cases: strings(use_cases),
        industries: strings(industries),
        auth_flow: auth_flow.to_string(),
        http_methods: strings(http_methods),
        key_endpoints: strings(key_endpoints),
        documentation_url: format!("https://camaraproject.org/{slug}/"),
        repository_url: format!("https://github.com/camaraproject/{repository}"),
    })
}

fn initial(
    name: &str,
    slug: &str,
    category: Category,
    description: &str,
    version: &str,
) -> ApiRecord {
    ApiRecord::Initial(InitialApi {
        name: name.to_string(),
        slug: slug.to_string(),
        category,
        description: description.to_string(),
        version: version.to_string(),
    })
}

pub(super) fn builtin_records() -> Vec<ApiRecord> {
    vec![
        stable(
            "SIM Swap",
            "sim-swap",
            Category::AuthFraud,
            "Checks whether the SIM card behind a phone number was swapped recently, returning either the date of the last swap or whether a swap happened within a given period. A core signal for account takeover and payment fraud prevention.",
            "2.0.0",
            &["1.0.0", "0.4.0"],
            &[
                "Block account takeover before a password reset",
                "Step-up verification for high-value bank transfers",
                "Risk scoring before sending one-time passcodes by SMS",
                "Onboarding risk assessment for new customers",
            ],
            &["Banking", "Fintech", "E-commerce", "Insurance"],
            "OpenID Connect CIBA (Client-Initiated Backchannel Authentication)",
            &["POST"],
            &[
                "POST /check - check whether a SIM swap happened within the last N hours",
                "POST /retrieve-date - get the timestamp of the latest SIM swap",
            ],
            "SimSwap",
        ),
        stable(
            "Device Swap",
            "device-swap",
            Category::AuthFraud,
            "Checks whether the physical device used with a phone number changed recently. Complements SIM Swap to detect fraud where an attacker moves a SIM into a new handset.",
            "1.0.0",
            &["0.1.0"],
            &[
                "Detect session hijacking after a handset change",
                "Re-verify mobile banking app bindings",
                "Fraud checks before approving card provisioning to a wallet",
            ],
            &["Banking", "Fintech", "Telecommunications"],
            "OpenID Connect CIBA (Client-Initiated Backchannel Authentication)",
            &["POST"],
            &[
                "POST /check - check whether the device changed within the last N hours",
                "POST /retrieve-date - get the timestamp of the latest device change",
            ],
            "DeviceSwap",
        ),
        stable(
            "Number Verification",
            "number-verification",
            Category::AuthFraud,
            "Confirms that the phone number supplied by a user is the one of the SIM in the device making the request, using the mobile network itself instead of an SMS code.",
            "2.0.0",
            &["1.0.0", "0.3.0"],
            &[
                "Passwordless sign-up and login without SMS one-time passcodes",
                "Silent second factor for mobile apps",
                "Verify the phone number on file during checkout",
            ],
            &["Banking", "E-commerce", "Social Media", "Ride Hailing"],
            "OpenID Connect Authorization Code (frontend flow over the mobile network)",
            &["GET", "POST"],
            &[
                "POST /verify - verify that a phone number matches the device",
                "GET /device-phone-number - share the phone number of the device",
            ],
            "NumberVerification",
        ),
        stable(
            "KYC Match",
            "kyc-match",
            Category::AuthFraud,
            "Matches customer identity attributes such as name, address and birthdate against the verified data the operator holds for the subscriber, returning a per-field match result.",
            "1.0.0",
            &["0.2.0"],
            &[
                "Remote customer onboarding with reduced document checks",
                "Identity verification to fight synthetic identity fraud",
                "Address confirmation for deliveries",
            ],
            &["Banking", "Insurance", "Public Sector", "Gaming"],
            "OpenID Connect CIBA (Client-Initiated Backchannel Authentication)",
            &["POST"],
            &["POST /match - compare identity attributes with operator records"],
            "KnowYourCustomer",
        ),
        stable(
            "Location Verification",
            "location-verification",
            Category::Location,
            "Verifies whether a device is within a given area, described as a circle or polygon, using network-derived location. Returns TRUE, FALSE or PARTIAL with a match rate.",
            "2.0.0",
            &["1.0.0", "0.2.0"],
            &[
                "Confirm a card payment happens near the cardholder",
                "Validate check-in for deliveries and field workers",
                "Enforce regional licensing for content and gaming",
            ],
            &["Banking", "Logistics", "Media", "Gaming"],
            "OpenID Connect Authorization Code or CIBA (three-legged access token)",
            &["POST"],
            &["POST /verify - verify that a device is within an area"],
            "DeviceLocation",
        ),
        stable(
            "Location Retrieval",
            "location-retrieval",
            Category::Location,
            "Retrieves the area where a device is located, as reported by the mobile network, with an indication of the last time the location was updated.",
            "1.0.0",
            &["0.3.0"],
            &[
                "Locate assets and vehicles without GPS hardware",
                "Dispatch emergency assistance to the right area",
                "Support fraud investigations with location evidence",
            ],
            &["Logistics", "Transportation", "Public Safety"],
            "OpenID Connect Authorization Code or CIBA (three-legged access token)",
            &["POST"],
            &["POST /retrieve - get the current area of a device"],
            "DeviceLocation",
        ),
        stable(
            "Quality on Demand",
            "quality-on-demand",
            Category::Connectivity,
            "Requests stable latency or throughput for an application session by creating a QoS session with a QoS profile for a device and an application server.",
            "1.0.0",
            &["0.11.0", "0.10.0"],
            &[
                "Low latency cloud gaming sessions",
                "Stable uplink for live video broadcasting",
                "Reliable connectivity for remote drone operation",
            ],
            &["Gaming", "Media", "Manufacturing", "Healthcare"],
            "OAuth 2.0 Client Credentials",
            &["GET", "POST", "DELETE"],
            &[
                "POST /sessions - create a QoS session",
                "GET /sessions/{sessionId} - read a QoS session",
                "DELETE /sessions/{sessionId} - release a QoS session",
                "POST /sessions/{sessionId}/extend - extend the session duration",
            ],
            "QualityOnDemand",
        ),
        stable(
            "Device Reachability Status",
            "device-reachability-status",
            Category::Device,
            "Reports whether a device is currently reachable over the network for data, SMS or both, so applications can choose the right channel or defer delivery.",
            "1.0.0",
            &["0.6.0"],
            &[
                "Pick SMS or data channel for notifications",
                "Monitor IoT fleet connectivity",
                "Defer firmware updates until a device is reachable",
            ],
            &["IoT", "Logistics", "Utilities"],
            "OAuth 2.0 Client Credentials",
            &["POST"],
            &["POST /retrieve - get the reachability status of a device"],
            "DeviceStatus",
        ),
        stable(
            "Carrier Billing",
            "carrier-billing",
            Category::Payments,
            "Charges digital purchases to the mobile phone bill or prepaid balance of a subscriber, with support for two-step payments that are prepared and then confirmed.",
            "1.0.0",
            &["0.4.0", "0.3.0"],
            &[
                "One-click purchase of digital content",
                "In-app payments for users without a bank card",
                "Micro-payments for transport tickets",
            ],
            &["Media", "Gaming", "Transportation"],
            "OpenID Connect Authorization Code or CIBA (three-legged access token)",
            &["GET", "POST"],
            &[
                "POST /payments - create a payment",
                "POST /payments/prepare - prepare a two-step payment",
                "POST /payments/{paymentId}/confirm - confirm a prepared payment",
                "GET /payments/{paymentId} - read a payment",
            ],
            "CarrierBillingCheckOut",
        ),
        stable(
            "Call Forwarding Signal",
            "call-forwarding-signal",
            Category::Communication,
            "Tells whether unconditional or conditional call forwarding is active on a phone number, exposing a common trick in voice phishing and authentication call fraud.",
            "1.0.0",
            &["0.3.0"],
            &[
                "Check for call forwarding before voice-based authentication",
                "Detect social engineering in contact centers",
            ],
            &["Banking", "Telecommunications", "Customer Service"],
            "OpenID Connect CIBA (Client-Initiated Backchannel Authentication)",
            &["POST"],
            &[
                "POST /unconditional-call-forwardings - check for unconditional call forwarding",
                "POST /call-forwardings - list active call forwarding services",
            ],
            "CallForwardingSignal",
        ),
        initial(
            "Age Verification",
            "age-verification",
            Category::AuthFraud,
            "Verifies whether the subscriber of a phone number is older than an age threshold using operator-held identity data.",
            "0.1.0",
        ),
        initial(
            "One Time Password SMS",
            "one-time-password-sms",
            Category::AuthFraud,
            "Sends a one-time passcode by SMS through the operator and validates the code returned by the user.",
            "0.2.0",
        ),
        initial(
            "Geofencing Subscriptions",
            "geofencing-subscriptions",
            Category::Location,
            "Subscribes to notifications when a device enters or leaves a geographic area.",
            "0.3.0",
        ),
        initial(
            "Connectivity Insights",
            "connectivity-insights",
            Category::Connectivity,
            "Estimates whether the network can meet the quality requirements of an application for a device.",
            "0.5.0",
        ),
        initial(
            "Network Slice Booking",
            "network-slice-booking",
            Category::Connectivity,
            "Books a dedicated network slice for an area and time window.",
            "0.1.0",
        ),
        initial(
            "Device Roaming Status",
            "device-roaming-status",
            Category::Device,
            "Reports whether a device is roaming and, if so, in which country.",
            "0.6.0",
        ),
        initial(
            "Device Identifier",
            "device-identifier",
            Category::Device,
            "Returns the hardware identifier and type of the device currently using a phone number.",
            "0.2.0",
        ),
        initial(
            "WebRTC",
            "webrtc",
            Category::Communication,
            "Embeds operator voice and video calling into web and mobile applications.",
            "0.2.0",
        ),
        initial(
            "Blockchain Public Address",
            "blockchain-public-address",
            Category::Payments,
            "Associates a blockchain public address with a phone number for wallet payments.",
            "0.1.0",
        ),
        initial(
            "Population Density Data",
            "population-density-data",
            Category::NetworkInsights,
            "Provides anonymised population density estimates for an area over time.",
            "0.2.0",
        ),
        initial(
            "Region Device Count",
            "region-device-count",
            Category::NetworkInsights,
            "Counts the devices present in a region, optionally filtered by roaming state and device type.",
            "0.1.0",
        ),
        initial(
            "Simple Edge Discovery",
            "simple-edge-discovery",
            Category::Edge,
            "Finds the edge cloud zone closest to a device so traffic can be routed to nearby application instances.",
            "0.11.0",
        ),
        initial(
            "Traffic Influence",
            "traffic-influence",
            Category::Edge,
            "Steers the traffic of an application towards the optimal edge instance for a device or area.",
            "0.8.0",
        ),
    ]
}

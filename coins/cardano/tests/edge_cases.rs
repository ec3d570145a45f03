//! Edge case and conformance tests for Cardano address derivation

use ed25519_dalek::SigningKey;
use walletd_cardano_address::{
    build_base_address, build_enterprise_address, build_reward_address, AddressGenerator,
    AddressType, CardanoError, Credential, CredentialKind, NetworkIdentifier, TypedAddress,
};

// CIP-0019 test vector credentials
const PAYMENT_KEY_HASH: &str = "9493315cd92eb5d8c4304e67b7e16ae36d61d34502694657811a2c8e";
const STAKE_KEY_HASH: &str = "337b62cfff6403a06a3acbc34f8c46003c69fe79a3628cefa9c47251";

fn payment() -> Credential {
    Credential::from_hex(CredentialKind::KeyHash, PAYMENT_KEY_HASH).unwrap()
}

fn stake() -> Credential {
    Credential::from_hex(CredentialKind::KeyHash, STAKE_KEY_HASH).unwrap()
}

// ============================================================================
// CIP-0019 Test Vectors
// ============================================================================

#[test]
fn test_mainnet_base_vector() {
    let address = build_base_address(NetworkIdentifier::Mainnet, &payment(), &stake()).unwrap();
    assert_eq!(
        address,
        "addr1qx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzer3n0d3vllmyqwsx5wktcd8cc3sq835lu7drv2xwl2wywfgse35a3x"
    );
}

#[test]
fn test_mainnet_enterprise_vector() {
    let address = build_enterprise_address(NetworkIdentifier::Mainnet, &payment()).unwrap();
    assert_eq!(address, "addr1vx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzers66hrl8");
}

#[test]
fn test_mainnet_reward_vector() {
    let address = build_reward_address(NetworkIdentifier::Mainnet, &stake()).unwrap();
    assert_eq!(address, "stake1uyehkck0lajq8gr28t9uxnuvgcqrc6070x3k9r8048z8y5gh6ffgw");
}

#[test]
fn test_testnet_base_vector() {
    let address = build_base_address(NetworkIdentifier::Testnet, &payment(), &stake()).unwrap();
    assert_eq!(
        address,
        "addr_test1qz2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzer3n0d3vllmyqwsx5wktcd8cc3sq835lu7drv2xwl2wywfgs68faae"
    );
}

#[test]
fn test_testnet_enterprise_vector() {
    let address = build_enterprise_address(NetworkIdentifier::Testnet, &payment()).unwrap();
    assert_eq!(address, "addr_test1vz2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzerspjrlsz");
}

#[test]
fn test_decode_vector() {
    let decoded = TypedAddress::from_bech32(
        "addr1qx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzer3n0d3vllmyqwsx5wktcd8cc3sq835lu7drv2xwl2wywfgse35a3x",
    )
    .unwrap();
    match decoded {
        TypedAddress::Base(base) => {
            assert_eq!(base.network(), NetworkIdentifier::Mainnet);
            assert_eq!(base.payment_credential(), &payment());
            assert_eq!(base.stake_credential(), &stake());
        }
        other => panic!("expected base address, got {other:?}"),
    }
}

// ============================================================================
// Prefix Scenarios
// ============================================================================

#[test]
fn test_reward_prefix_per_network() {
    let h1 = stake();
    assert!(build_reward_address(NetworkIdentifier::Mainnet, &h1).unwrap().starts_with("stake1"));
    assert!(build_reward_address(NetworkIdentifier::Testnet, &h1).unwrap().starts_with("stake_test1"));
    assert!(build_reward_address(NetworkIdentifier::Preview, &h1).unwrap().starts_with("stake_test1"));
    assert!(build_reward_address(NetworkIdentifier::Preprod, &h1).unwrap().starts_with("stake_test1"));
}

#[test]
fn test_base_payload_longer_than_enterprise() {
    let (h1, h2) = (stake(), payment());
    let base = build_base_address(NetworkIdentifier::Mainnet, &h2, &h1).unwrap();
    let enterprise = build_enterprise_address(NetworkIdentifier::Mainnet, &h2).unwrap();
    assert!(base.starts_with("addr1"));
    assert!(enterprise.starts_with("addr1"));

    let base_payload = TypedAddress::from_bech32(&base).unwrap().to_bytes();
    let enterprise_payload = TypedAddress::from_bech32(&enterprise).unwrap().to_bytes();
    assert_eq!(base_payload.len(), 57);
    assert_eq!(enterprise_payload.len(), 29);
}

#[test]
fn test_kinds_are_mutually_distinct() {
    let net = NetworkIdentifier::Mainnet;
    let h = payment();
    let reward = build_reward_address(net, &h).unwrap();
    let enterprise = build_enterprise_address(net, &h).unwrap();
    let base = build_base_address(net, &h, &stake()).unwrap();
    assert_ne!(reward, enterprise);
    assert_ne!(reward, base);
    assert_ne!(enterprise, base);
}

// ============================================================================
// Malformed Credentials
// ============================================================================

#[test]
fn test_short_credential_rejected() {
    let result = Credential::key_hash(&[0u8; 27]);
    assert!(matches!(
        result,
        Err(CardanoError::InvalidCredential { expected: 28, actual: 27, .. })
    ));
}

#[test]
fn test_long_credential_rejected() {
    // a raw ed25519 key is not a credential hash
    let result = Credential::key_hash(&[0u8; 32]);
    assert!(matches!(
        result,
        Err(CardanoError::InvalidCredential { expected: 28, actual: 32, .. })
    ));
}

#[test]
fn test_empty_credential_rejected() {
    assert!(Credential::script_hash(&[]).is_err());
    assert!(Credential::from_hex(CredentialKind::KeyHash, "").is_err());
}

// ============================================================================
// Key Hashing and Concurrency
// ============================================================================

#[test]
fn test_credentials_from_ed25519_keys() {
    let payment_key = SigningKey::from_bytes(&[7u8; 32]).verifying_key();
    let stake_key = SigningKey::from_bytes(&[8u8; 32]).verifying_key();

    let payment = Credential::from_public_key(payment_key.as_bytes());
    let stake = Credential::from_public_key(stake_key.as_bytes());
    assert_ne!(payment, stake);

    let address = build_base_address(NetworkIdentifier::Preprod, &payment, &stake).unwrap();
    assert!(address.starts_with("addr_test1"));
    assert!(TypedAddress::validate(&address));
}

#[test]
fn test_concurrent_derivation() {
    let generator = &AddressGenerator::silent();
    let expected = build_base_address(NetworkIdentifier::Mainnet, &payment(), &stake()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(move || generator.base(NetworkIdentifier::Mainnet, &payment(), &stake())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}

#[test]
fn test_decoded_type_matches_builder() {
    let net = NetworkIdentifier::Mainnet;
    let reward = build_reward_address(net, &stake()).unwrap();
    let enterprise = build_enterprise_address(net, &payment()).unwrap();
    assert_eq!(TypedAddress::from_bech32(&reward).unwrap().address_type(), AddressType::Reward);
    assert_eq!(
        TypedAddress::from_bech32(&enterprise).unwrap().address_type(),
        AddressType::Enterprise
    );
}

#[test]
fn test_validate_rejects_cross_network_text() {
    let mainnet = build_enterprise_address(NetworkIdentifier::Mainnet, &payment()).unwrap();
    let tampered = mainnet.replacen("addr1", "addr_test1", 1);
    assert!(!TypedAddress::validate(&tampered));
}

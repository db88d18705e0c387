#[cfg(test)]
mod tests {
    use crate::constants::{
        SCORE_MAX, SEED_IDENTITY, SEED_SCORE, SEED_TRANSFER_REQUEST, TRANSFER_EXPIRY_SECONDS,
    };
    use crate::state::{CreditScoreAccount, IdentityAccount, ScoreLevel, TransferRequest};
    use crate::ID as PROGRAM_ID;
    use anchor_lang::prelude::Pubkey;
    use anchor_lang::{AccountDeserialize, AccountSerialize};

    const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

    fn get_identity_pda(owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[SEED_IDENTITY, owner.as_ref()], &PROGRAM_ID)
    }

    fn get_score_pda(owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[SEED_SCORE, owner.as_ref()], &PROGRAM_ID)
    }

    fn get_transfer_request_pda(from: &Pubkey, to: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[SEED_TRANSFER_REQUEST, from.as_ref(), to.as_ref()],
            &PROGRAM_ID,
        )
    }

    fn encode<T: AccountSerialize>(account: &T) -> Vec<u8> {
        let mut buf = Vec::new();
        account.try_serialize(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_identity_pda_is_deterministic() {
        let owner = Pubkey::new_unique();

        assert_eq!(get_identity_pda(&owner), get_identity_pda(&owner));
        assert_eq!(get_score_pda(&owner), get_score_pda(&owner));
    }

    #[test]
    fn test_seed_prefix_namespaces_account_kinds() {
        let owner = Pubkey::new_unique();

        let (identity_pda, _) = get_identity_pda(&owner);
        let (score_pda, _) = get_score_pda(&owner);
        assert_ne!(identity_pda, score_pda);
    }

    #[test]
    fn test_transfer_request_pda_is_direction_sensitive() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        let (forward, _) = get_transfer_request_pda(&a, &b);
        let (backward, _) = get_transfer_request_pda(&b, &a);
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_identity_codec_round_trip() {
        let identity = IdentityAccount {
            owner: Pubkey::new_unique(),
            created_at: 1_700_000_000,
            verified: true,
            verified_at: Some(1_700_000_100),
            bump: 254,
        };

        let buf = encode(&identity);
        assert_eq!(buf.len(), IdentityAccount::SIZE);

        let decoded = IdentityAccount::try_deserialize(&mut &buf[..]).unwrap();
        assert_eq!(decoded.owner, identity.owner);
        assert_eq!(decoded.created_at, identity.created_at);
        assert_eq!(decoded.verified, identity.verified);
        assert_eq!(decoded.verified_at, identity.verified_at);
        assert_eq!(decoded.bump, identity.bump);
    }

    #[test]
    fn test_unverified_identity_encodes_without_timestamp() {
        let identity = IdentityAccount {
            owner: Pubkey::new_unique(),
            created_at: 1_700_000_000,
            verified: false,
            verified_at: None,
            bump: 253,
        };

        // Option<i64> is a 1-byte tag plus payload only when Some
        let buf = encode(&identity);
        assert_eq!(buf.len(), IdentityAccount::SIZE - 8);

        let decoded = IdentityAccount::try_deserialize(&mut &buf[..]).unwrap();
        assert!(!decoded.verified);
        assert_eq!(decoded.verified_at, None);
    }

    #[test]
    fn test_score_codec_round_trip() {
        let score = CreditScoreAccount {
            owner: Pubkey::new_unique(),
            score: 650,
            score_level: ScoreLevel::Medium,
            calculated_at: 1_700_000_000,
            bump: 255,
        };

        let buf = encode(&score);
        assert_eq!(buf.len(), CreditScoreAccount::SIZE);

        let decoded = CreditScoreAccount::try_deserialize(&mut &buf[..]).unwrap();
        assert_eq!(decoded.owner, score.owner);
        assert_eq!(decoded.score, score.score);
        assert_eq!(decoded.score_level, score.score_level);
        assert_eq!(decoded.calculated_at, score.calculated_at);
        assert_eq!(decoded.bump, score.bump);
    }

    #[test]
    fn test_transfer_request_codec_round_trip() {
        let request = TransferRequest {
            from_owner: Pubkey::new_unique(),
            to_owner: Pubkey::new_unique(),
            identity: Pubkey::new_unique(),
            created_at: 1_700_000_000,
            expires_at: 1_700_000_000 + TRANSFER_EXPIRY_SECONDS,
            bump: 252,
        };

        let buf = encode(&request);
        assert_eq!(buf.len(), TransferRequest::SIZE);

        let decoded = TransferRequest::try_deserialize(&mut &buf[..]).unwrap();
        assert_eq!(decoded.from_owner, request.from_owner);
        assert_eq!(decoded.to_owner, request.to_owner);
        assert_eq!(decoded.identity, request.identity);
        assert_eq!(decoded.created_at, request.created_at);
        assert_eq!(decoded.expires_at, request.expires_at);
        assert_eq!(decoded.bump, request.bump);
    }

    #[test]
    fn test_decode_rejects_wrong_account_kind() {
        let score = CreditScoreAccount {
            owner: Pubkey::new_unique(),
            score: 900,
            score_level: ScoreLevel::High,
            calculated_at: 1_700_000_000,
            bump: 255,
        };

        let buf = encode(&score);
        assert!(IdentityAccount::try_deserialize(&mut &buf[..]).is_err());
        assert!(TransferRequest::try_deserialize(&mut &buf[..]).is_err());
    }

    #[test]
    fn test_score_banding_thresholds() {
        assert_eq!(ScoreLevel::from_score(1000), ScoreLevel::High);
        assert_eq!(ScoreLevel::from_score(700), ScoreLevel::High);
        assert_eq!(ScoreLevel::from_score(699), ScoreLevel::Medium);
        assert_eq!(ScoreLevel::from_score(500), ScoreLevel::Medium);
        assert_eq!(ScoreLevel::from_score(499), ScoreLevel::Low);
        assert_eq!(ScoreLevel::from_score(0), ScoreLevel::Low);
    }

    #[test]
    fn test_balance_tiers_band_consistently() {
        let cases = [
            (15 * LAMPORTS_PER_SOL, ScoreLevel::High),
            (10 * LAMPORTS_PER_SOL, ScoreLevel::High),
            (LAMPORTS_PER_SOL, ScoreLevel::Medium),
            (LAMPORTS_PER_SOL / 10, ScoreLevel::Low),
            (LAMPORTS_PER_SOL / 100, ScoreLevel::Low),
            (0, ScoreLevel::Low),
        ];

        for (lamports, expected) in cases {
            let score = CreditScoreAccount::score_for_balance(lamports);
            assert!(score <= SCORE_MAX);
            assert_eq!(ScoreLevel::from_score(score), expected, "{} lamports", lamports);
        }
    }

    #[test]
    fn test_richer_balance_never_scores_lower() {
        let balances = [
            0,
            LAMPORTS_PER_SOL / 100,
            LAMPORTS_PER_SOL / 10,
            LAMPORTS_PER_SOL,
            10 * LAMPORTS_PER_SOL,
        ];

        let scores: Vec<u16> = balances
            .iter()
            .map(|b| CreditScoreAccount::score_for_balance(*b))
            .collect();
        assert!(scores.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_transfer_request_expiry_boundary() {
        let request = TransferRequest {
            from_owner: Pubkey::new_unique(),
            to_owner: Pubkey::new_unique(),
            identity: Pubkey::new_unique(),
            created_at: 1_700_000_000,
            expires_at: 1_700_000_000 + TRANSFER_EXPIRY_SECONDS,
            bump: 255,
        };

        // Claimable through the expiry moment itself
        assert!(!request.is_expired(request.created_at));
        assert!(!request.is_expired(request.expires_at));
        assert!(request.is_expired(request.expires_at + 1));
    }

    #[test]
    fn test_fresh_request_slot_reads_uninitialized() {
        let mut request = TransferRequest {
            from_owner: Pubkey::default(),
            to_owner: Pubkey::default(),
            identity: Pubkey::default(),
            created_at: 0,
            expires_at: 0,
            bump: 0,
        };
        assert!(!request.is_initialized());

        request.from_owner = Pubkey::new_unique();
        assert!(request.is_initialized());
    }

    #[test]
    fn test_verify_then_unverify_clears_timestamp() {
        let mut identity = IdentityAccount {
            owner: Pubkey::new_unique(),
            created_at: 1_700_000_000,
            verified: false,
            verified_at: None,
            bump: 255,
        };

        identity.set_verified(1_700_000_500);
        assert!(identity.verified);
        assert_eq!(identity.verified_at, Some(1_700_000_500));

        identity.clear_verified();
        assert!(!identity.verified);
        assert_eq!(identity.verified_at, None);
    }
}

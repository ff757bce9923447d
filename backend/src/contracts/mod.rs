pub mod signer;

use ethers::prelude::abigen;

// Bindings for the MintGenesisPass UUPS proxy. The mint/royalty/withdraw
// rules live in the contract; the harness only encodes calls against this
// surface and decodes its custom errors.
abigen!(
    MintGenesisPass,
    r#"[
        function initialize(address treasuryAddress)
        function owner() external view returns (address)
        function treasuryAddress() external view returns (address)
        function setTreasuryAddress(address treasuryAddress)
        function setMintConfig(uint256 startDate, uint256 endDate)
        function setMerkleRoot(bytes32 merkleRoot)
        function setRoyalty(uint256 royalty)
        function royalty() external view returns (uint256)
        function royaltyInfo(uint256 tokenId, uint256 salePrice) external view returns (address, uint256)
        function mint(bytes32[] calldata merkleProof) external payable
        function balanceOf(address owner) external view returns (uint256)
        function totalSupply() external view returns (uint256)
        function withdraw()
        function upgradeToAndCall(address newImplementation, bytes data) external payable
        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId)
        error MintNotStart()
        error MintFinished()
        error UnauthorizedMinter(address minter)
        error TokenNotMinted(uint256 tokenId)
        error OwnableUnauthorizedAccount(address account)
    ]"#
);

use crmcib_core::Document;

/// A two-node iSCSI cluster with one target, one logical unit and their
/// portblock helpers, as a LINSTOR gateway would configure it
#[allow(dead_code)]
pub const ISCSI_CIB: &str = r##"<cib crm_feature_set="3.0.14" validate-with="pacemaker-2.10" epoch="12" num_updates="0" admin_epoch="0">
  <configuration>
    <crm_config>
      <cluster_property_set id="cib-bootstrap-options">
        <nvpair id="cib-bootstrap-options-have-watchdog" name="have-watchdog" value="false"/>
        <nvpair id="cib-bootstrap-options-cluster-name" name="cluster-name" value="linstor"/>
      </cluster_property_set>
    </crm_config>
    <nodes>
      <node id="1" uname="li0"/>
      <node id="2" uname="li1">
        <instance_attributes id="nodes-2">
          <nvpair id="nodes-2-standby" name="standby" value="on"/>
        </instance_attributes>
      </node>
    </nodes>
    <resources>
      <primitive id="p_iscsi_example_ip" class="ocf" provider="heartbeat" type="IPaddr2"/>
      <primitive id="p_pblock_example" class="ocf" provider="heartbeat" type="portblock"/>
      <primitive id="p_iscsi_example" class="ocf" provider="heartbeat" type="iSCSITarget">
        <meta_attributes id="p_iscsi_example-meta_attributes">
          <nvpair id="p_iscsi_example-meta_attributes-target-role" name="target-role" value="Started"/>
        </meta_attributes>
      </primitive>
      <primitive id="p_iscsi_example_lu1" class="ocf" provider="heartbeat" type="iSCSILogicalUnit"/>
      <primitive id="p_punblock_example" class="ocf" provider="heartbeat" type="portblock"/>
    </resources>
    <constraints>
      <rsc_location id="lo_iscsi_example" resource-discovery="never">
        <resource_set id="lo_iscsi_example-0">
          <resource_ref id="p_iscsi_example_lu1"/>
          <resource_ref id="p_iscsi_example"/>
        </resource_set>
        <rule score="-INFINITY" id="lo_iscsi_example-rule">
          <expression attribute="#uname" operation="ne" value="li0" id="lo_iscsi_example-rule-expression-0"/>
        </rule>
      </rsc_location>
      <rsc_colocation id="co_pblock_example" score="INFINITY" rsc="p_pblock_example" with-rsc="p_iscsi_example_ip"/>
      <rsc_colocation id="co_iscsi_example" score="INFINITY" rsc="p_iscsi_example" with-rsc="p_pblock_example"/>
      <rsc_colocation id="co_iscsi_example_lu1" score="INFINITY" rsc="p_iscsi_example_lu1" with-rsc="p_iscsi_example"/>
      <rsc_colocation id="co_punblock_example" score="INFINITY" rsc="p_punblock_example" with-rsc="p_iscsi_example_ip"/>
      <rsc_location id="lo_iscsi_example_lu1" rsc="p_iscsi_example_lu1" resource-discovery="never">
        <rule score="0" id="lo_iscsi_example_lu1-rule">
          <expression attribute="#uname" operation="ne" value="li0" id="lo_iscsi_example_lu1-rule-expression-0"/>
        </rule>
      </rsc_location>
      <rsc_order id="o_pblock_example" score="INFINITY" first="p_iscsi_example_ip" then="p_pblock_example"/>
      <rsc_order id="o_iscsi_example" score="INFINITY" first="p_pblock_example" then="p_iscsi_example"/>
      <rsc_order id="o_iscsi_example_lu1" score="INFINITY" first="p_iscsi_example" then="p_iscsi_example_lu1"/>
      <rsc_order id="o_punblock_example" score="INFINITY" first="p_iscsi_example_lu1" then="p_punblock_example"/>
    </constraints>
  </configuration>
  <status>
    <node_state id="1" uname="li0" in_ccm="true" crmd="online" join="member" expected="member">
      <lrm id="1">
        <lrm_resources>
          <lrm_resource id="p_iscsi_example_ip" type="IPaddr2" class="ocf" provider="heartbeat">
            <lrm_rsc_op id="p_iscsi_example_ip_last_0" operation="start" rc-code="0"/>
          </lrm_resource>
          <lrm_resource id="p_pblock_example" type="portblock" class="ocf" provider="heartbeat">
            <lrm_rsc_op id="p_pblock_example_last_0" operation="start" rc-code="0"/>
          </lrm_resource>
          <lrm_resource id="p_iscsi_example" type="iSCSITarget" class="ocf" provider="heartbeat">
            <lrm_rsc_op id="p_iscsi_example_last_0" operation="start" rc-code="0"/>
            <lrm_rsc_op id="p_iscsi_example_monitor_15000" operation="monitor" rc-code="0"/>
          </lrm_resource>
          <lrm_resource id="p_iscsi_example_lu1" type="iSCSILogicalUnit" class="ocf" provider="heartbeat">
            <lrm_rsc_op id="p_iscsi_example_lu1_last_0" operation="stop" rc-code="0"/>
          </lrm_resource>
          <lrm_resource id="p_punblock_example" type="portblock" class="ocf" provider="heartbeat">
            <lrm_rsc_op id="p_punblock_example_last_0" operation="monitor" rc-code="7"/>
          </lrm_resource>
        </lrm_resources>
      </lrm>
    </node_state>
    <node_state id="2" uname="li1" in_ccm="true" crmd="online" join="member" expected="member">
      <lrm id="2">
        <lrm_resources>
          <lrm_resource id="p_iscsi_example" type="iSCSITarget" class="ocf" provider="heartbeat">
            <lrm_rsc_op id="p_iscsi_example_last_0" operation="monitor" rc-code="7"/>
          </lrm_resource>
        </lrm_resources>
      </lrm>
    </node_state>
  </status>
</cib>"##;

/// Parse the iSCSI fixture
#[allow(dead_code)]
pub fn iscsi_cib() -> Document {
    Document::parse(ISCSI_CIB).unwrap()
}

/// A document with nothing but the root element
#[allow(dead_code)]
pub fn empty_cib() -> Document {
    Document::parse("<cib/>").unwrap()
}

/// A single-node document whose `resource` has the given operation history
///
/// `ops` are `(operation, rc-code)` pairs; a `None` rc-code omits the attribute.
#[allow(dead_code)]
pub fn cib_with_history(resource: &str, ops: &[(&str, Option<&str>)]) -> Document {
    let records: String = ops
        .iter()
        .enumerate()
        .map(|(i, (op, rc))| match rc {
            Some(rc) => format!(r#"<lrm_rsc_op id="{resource}_{i}" operation="{op}" rc-code="{rc}"/>"#),
            None => format!(r#"<lrm_rsc_op id="{resource}_{i}" operation="{op}"/>"#),
        })
        .collect();
    let xml = format!(
        r#"<cib><configuration><resources><primitive id="{resource}"/></resources></configuration>
        <status><node_state uname="li0"><lrm><lrm_resources>
            <lrm_resource id="{resource}">{records}</lrm_resource>
        </lrm_resources></lrm></node_state></status></cib>"#
    );
    Document::parse(&xml).unwrap()
}
